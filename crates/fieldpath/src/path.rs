//! The immutable field path value and its construction algebra.

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::element::PathElement;
use crate::error::PathError;
use crate::parser::PathParser;

/// Stand-in for the last element of an empty path. Construction guarantees
/// at least one element, so accessors never actually reach for it.
static ANY: PathElement = PathElement::Any;

/// An immutable path to a field or nested value in a map, object graph, or
/// JSON-like document.
///
/// A path is an ordered, non-empty sequence of [`PathElement`] values. The
/// `*` wildcard may stand for any field or index at a given level; a path
/// containing a wildcard is *indirect* and [`is_direct`](FieldPath::is_direct)
/// returns `false` for it. There is no zero-length path: absence of a path
/// is represented by `None`, and [`parse`](FieldPath::parse) returns
/// `Ok(None)` for empty input rather than an error.
///
/// Every deriving operation (`child`, `sibling`, `parent`, `append`)
/// allocates a new value and leaves the receiver untouched. The structural
/// hash and the direct flag are computed eagerly at construction, so
/// instances are freely shareable across threads without synchronisation.
///
/// # Example
///
/// ```
/// use fieldpath::FieldPath;
///
/// let path = FieldPath::parse("variants[*].prices.purchasePrice")?
///     .ok_or(fieldpath::PathError::EmptyPath)?;
/// assert_eq!(path.length(), 4);
/// assert_eq!(path.value(), "variants.*.prices.purchasePrice");
/// assert!(!path.is_direct());
/// # Ok::<(), fieldpath::PathError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FieldPath {
    // Invariant: never empty.
    elements: Vec<PathElement>,
    direct: bool,
    hash: u64,
}

impl FieldPath {
    /// Internal constructor; callers guarantee `elements` is non-empty.
    fn from_vec(elements: Vec<PathElement>) -> Self {
        let direct = !elements.iter().any(PathElement::is_any);
        let hash = structural_hash(&elements);
        Self {
            elements,
            direct,
            hash,
        }
    }

    /// Creates a field path from an explicit element sequence.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptyPath`] when `elements` is empty.
    pub fn new(elements: Vec<PathElement>) -> Result<Self, PathError> {
        if elements.is_empty() {
            return Err(PathError::EmptyPath);
        }
        Ok(Self::from_vec(elements))
    }

    /// Creates a field path from the given field names, so `["boo", "foo"]`
    /// yields the `boo.foo` path. A `*` name becomes the wildcard.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptyPath`] when no name is given, or
    /// [`PathError::InvalidElement`] when any name is empty or contains `.`.
    pub fn from_fields(names: &[&str]) -> Result<Self, PathError> {
        if names.is_empty() {
            return Err(PathError::EmptyPath);
        }
        let elements = names
            .iter()
            .map(|name| PathElement::field(*name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_vec(elements))
    }

    /// Creates a single-element path to the given array or collection index.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::from_vec(vec![PathElement::index(index)])
    }

    /// Creates a single-element path from the given root element.
    #[must_use]
    pub fn from_element(element: PathElement) -> Self {
        Self::from_vec(vec![element])
    }

    /// Parses a path expression such as `a.b[2].c` or `variants[*].prices`.
    ///
    /// Empty input, or input reducing to zero elements (a lone `.`), yields
    /// `Ok(None)` — "no path", never a zero-length instance.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::UnbalancedBracket`] for a `]` with no matching
    /// `[`, or [`PathError::InvalidElement`] when a scanned token is not a
    /// valid element (e.g. the empty brackets in `a[]`).
    pub fn parse(path: &str) -> Result<Option<Self>, PathError> {
        if path.is_empty() {
            return Ok(None);
        }
        let elements = PathParser::new(path).collect::<Result<Vec<_>, _>>()?;
        if elements.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self::from_vec(elements)))
    }

    /// Returns the number of elements this path consists of. Always ≥ 1.
    #[must_use]
    pub fn length(&self) -> usize {
        self.elements.len()
    }

    /// Returns a read-only view of the elements this path consists of.
    #[must_use]
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Returns the first element of this path.
    #[must_use]
    pub fn head(&self) -> &PathElement {
        self.elements.first().unwrap_or(&ANY)
    }

    /// Returns the last element of this path.
    #[must_use]
    pub fn tail(&self) -> &PathElement {
        self.elements.last().unwrap_or(&ANY)
    }

    /// Returns the string form of the last element: the field name, the
    /// decimal index, or `*` for the wildcard.
    #[must_use]
    pub fn field(&self) -> String {
        match self.tail() {
            PathElement::Field(name) => name.clone(),
            PathElement::Index(index) => index.to_string(),
            PathElement::Any => "*".to_owned(),
        }
    }

    /// Returns the route to the last element, that is every element except
    /// the tail. Empty for a single-element path.
    #[must_use]
    pub fn path(&self) -> &[PathElement] {
        self.elements.split_last().map_or(&[], |(_, init)| init)
    }

    /// Returns the parent of this path, or `None` for a single-element path.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.elements.split_last()?;
        if init.is_empty() {
            return None;
        }
        Some(Self::from_vec(init.to_vec()))
    }

    /// Returns a new path to the given child field. A `*` name appends the
    /// wildcard.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidElement`] when the name is empty or
    /// contains `.`.
    pub fn child(&self, name: &str) -> Result<Self, PathError> {
        Ok(self.child_element(PathElement::field(name)?))
    }

    /// Returns a new path to the given indexed child.
    #[must_use]
    pub fn child_index(&self, index: usize) -> Self {
        self.child_element(PathElement::index(index))
    }

    /// Returns a new path with the given element appended.
    #[must_use]
    pub fn child_element(&self, element: PathElement) -> Self {
        let mut elements = self.elements.clone();
        elements.push(element);
        Self::from_vec(elements)
    }

    /// Returns a new path to the given sibling field: the same parent, with
    /// the last element replaced. A `*` name makes the tail a wildcard.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidElement`] when the name is empty or
    /// contains `.`.
    pub fn sibling(&self, name: &str) -> Result<Self, PathError> {
        Ok(self.sibling_element(PathElement::field(name)?))
    }

    /// Returns a new path to the given indexed sibling.
    #[must_use]
    pub fn sibling_index(&self, index: usize) -> Self {
        self.sibling_element(PathElement::index(index))
    }

    /// Returns a new path with the last element replaced by `element`.
    #[must_use]
    pub fn sibling_element(&self, element: PathElement) -> Self {
        let mut elements = self.path().to_vec();
        elements.push(element);
        Self::from_vec(elements)
    }

    /// Appends the given path to this one and returns the result. `None`
    /// yields a path equal to this one.
    #[must_use]
    pub fn append(&self, other: Option<&Self>) -> Self {
        other.map_or_else(
            || self.clone(),
            |suffix| {
                let mut elements = self.elements.clone();
                elements.extend(suffix.elements.iter().cloned());
                Self::from_vec(elements)
            },
        )
    }

    /// Prepends an indexed element in front of an existing element
    /// sequence, for building paths element-sequence-first.
    #[must_use]
    pub fn concat_index(index: usize, children: &[PathElement]) -> Vec<PathElement> {
        let mut result = Vec::with_capacity(children.len() + 1);
        result.push(PathElement::index(index));
        result.extend(children.iter().cloned());
        result
    }

    /// Prepends a field element in front of an existing element sequence.
    /// A `*` name prepends the wildcard.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidElement`] when the name is empty or
    /// contains `.`.
    pub fn concat_field(name: &str, children: &[PathElement]) -> Result<Vec<PathElement>, PathError> {
        let mut result = Vec::with_capacity(children.len() + 1);
        result.push(PathElement::field(name)?);
        result.extend(children.iter().cloned());
        Ok(result)
    }

    /// Returns the canonical string form of this path, e.g.
    /// `variants.*.prices[0]`.
    ///
    /// Reparsing the result yields an equal path, with one caveat:
    /// associative bracket keys are not distinguished from dotted field
    /// names in the output, so `a[key]` renders as `a.key`.
    #[must_use]
    pub fn value(&self) -> String {
        let mut out = String::with_capacity(self.elements.len() * 8);
        for element in &self.elements {
            element.print_to(&mut out);
        }
        out
    }

    /// Returns whether this path is direct, that is contains no wildcard
    /// element. Cached at construction.
    #[must_use]
    pub const fn is_direct(&self) -> bool {
        self.direct
    }

    /// Returns whether the other path matches this one.
    ///
    /// Matching differs from equality in two ways: wildcard elements on
    /// either side match anything, and only the elements of the shorter
    /// path are compared — excess elements in the longer path are
    /// unconstrained, so `a.*` matches `a.b.c`. Use
    /// [`starts_with`](FieldPath::starts_with) for a directional prefix
    /// containment test and `==` for strict structural equality.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.elements
            .iter()
            .zip(&other.elements)
            .all(|(mine, theirs)| mine.matches(theirs))
    }

    /// Parses the given expression and matches the result against this
    /// path. Empty or unparseable input is simply no match.
    #[must_use]
    pub fn matches_str(&self, path: &str) -> bool {
        Self::parse(path)
            .ok()
            .flatten()
            .is_some_and(|other| self.matches(&other))
    }

    /// Returns whether this path starts with the given one, comparing
    /// wildcard-aware element by element. Unlike
    /// [`matches`](FieldPath::matches) this is directional: a prefix longer
    /// than this path never passes.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        prefix.elements.len() <= self.elements.len()
            && self
                .elements
                .iter()
                .zip(&prefix.elements)
                .all(|(mine, theirs)| mine.matches(theirs))
    }
}

/// Order-sensitive hash over the full element sequence, computed once at
/// construction.
fn structural_hash(elements: &[PathElement]) -> u64 {
    let mut hasher = DefaultHasher::new();
    elements.hash(&mut hasher);
    hasher.finish()
}

impl PartialEq for FieldPath {
    fn eq(&self, other: &Self) -> bool {
        // Compare from the tail backward: paths sharing a prefix diverge
        // near the leaf more often than near the root.
        self.elements.len() == other.elements.len()
            && self
                .elements
                .iter()
                .rev()
                .zip(other.elements.iter().rev())
                .all(|(mine, theirs)| mine == theirs)
    }
}

impl Eq for FieldPath {}

impl Hash for FieldPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}

impl<'a> IntoIterator for &'a FieldPath {
    type Item = &'a PathElement;
    type IntoIter = std::slice::Iter<'a, PathElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value())
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text)
            .map_err(D::Error::custom)?
            .ok_or_else(|| D::Error::custom("a field path must not be empty"))
    }
}
