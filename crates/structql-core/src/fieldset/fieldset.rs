use crate::Selection;
use indexmap::IndexMap;

/// A sparse selection of fields: a mapping from rendered field name to a
/// [`Selection`].
///
/// Passing a fieldset when marshaling renders only the fields it selects
/// (plus any field tagged `keep`). Passing no fieldset renders everything.
/// Entries keep their insertion order, but equality ignores order.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct Fieldset(IndexMap<String, Selection>);
impl Fieldset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a delimited list of field paths, such as the value of a
    /// `fields=id,name,parent.id` URL query parameter, into a nested
    /// fieldset.
    ///
    /// `field_delimiter` separates entries and `subfield_delimiter`
    /// separates the segments of one entry's path. Each path ends in a
    /// `true` leaf. Entries are trimmed, empty entries and empty segments are
    /// ignored, and entries are combined with [`Fieldset::merge`] so that
    /// `parent,parent.id` and `parent.id,parent` agree. An empty delimiter
    /// never splits.
    ///
    /// Returns `None` (render everything) when `list` is empty or blank.
    ///
    /// ```rust
    /// use structql_core::fieldset;
    /// use structql_core::Fieldset;
    ///
    /// let fieldset = Fieldset::from_delimited_list("id|parent/id", "|", "/");
    /// assert_eq!(fieldset, Some(fieldset! {
    ///     "id" => true,
    ///     "parent" => { "id" => true },
    /// }));
    /// ```
    pub fn from_delimited_list(
        list: &str,
        field_delimiter: &str,
        subfield_delimiter: &str,
    ) -> Option<Fieldset> {
        if list.trim().is_empty() {
            return None;
        }

        let mut fieldset = Fieldset::new();
        for entry in split_nonempty(list, field_delimiter) {
            let path: Vec<&str> =
                split_nonempty(entry, subfield_delimiter).collect();
            if let Some(entry_fieldset) = Self::from_path(path.as_slice()) {
                fieldset.merge(entry_fieldset);
            }
        }

        Some(fieldset)
    }

    /// [`Fieldset::from_delimited_list`] with `,` between entries and `.`
    /// between path segments.
    ///
    /// ```rust
    /// use structql_core::fieldset;
    /// use structql_core::Fieldset;
    ///
    /// let fieldset = Fieldset::from_url_query_param("id,name,parent.id");
    /// assert_eq!(fieldset, Some(fieldset! {
    ///     "id" => true,
    ///     "name" => true,
    ///     "parent" => { "id" => true },
    /// }));
    /// ```
    pub fn from_url_query_param(raw: &str) -> Option<Fieldset> {
        Self::from_delimited_list(raw, ",", ".")
    }

    fn from_path(path: &[&str]) -> Option<Fieldset> {
        let (last, parents) = path.split_last()?;

        let mut fieldset = Fieldset::new();
        fieldset.insert(*last, true);
        for parent in parents.iter().rev() {
            let mut nested = Fieldset::new();
            nested.insert(*parent, fieldset);
            fieldset = nested;
        }
        Some(fieldset)
    }

    pub fn contains_key(&self, field_name: &str) -> bool {
        self.0.contains_key(field_name)
    }

    pub fn get(&self, field_name: &str) -> Option<&Selection> {
        self.0.get(field_name)
    }

    /// Insert or replace the selection for `field_name`, returning the
    /// previous selection if there was one.
    pub fn insert(
        &mut self,
        field_name: impl Into<String>,
        selection: impl Into<Selection>,
    ) -> Option<Selection> {
        self.0.insert(field_name.into(), selection.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Selection> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Merge `other` into `self` as a set union. See [`Selection::merge`]
    /// for how colliding entries are combined.
    pub fn merge(&mut self, other: Fieldset) {
        for (field_name, theirs) in other.0 {
            match self.0.get_mut(field_name.as_str()) {
                Some(ours) => ours.merge(theirs),
                None => {
                    self.0.insert(field_name, theirs);
                },
            }
        }
    }

    pub fn remove(&mut self, field_name: &str) -> Option<Selection> {
        self.0.shift_remove(field_name)
    }

    /// Return the set union of two fieldsets. See [`Fieldset::merge`].
    pub fn union(mut self, other: Fieldset) -> Fieldset {
        self.merge(other);
        self
    }
}
impl<K: Into<String>, S: Into<Selection>> FromIterator<(K, S)> for Fieldset {
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field_name, selection)| (field_name.into(), selection.into()))
                .collect()
        )
    }
}
impl IntoIterator for Fieldset {
    type Item = (String, Selection);
    type IntoIter = indexmap::map::IntoIter<String, Selection>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
impl<'a> IntoIterator for &'a Fieldset {
    type Item = (&'a String, &'a Selection);
    type IntoIter = indexmap::map::Iter<'a, String, Selection>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Split `input` on `delimiter`, trimming each piece and dropping empty
/// ones. An empty delimiter yields the whole (trimmed) input.
fn split_nonempty<'a>(
    input: &'a str,
    delimiter: &'a str,
) -> Box<dyn Iterator<Item = &'a str> + 'a> {
    let pieces: Box<dyn Iterator<Item = &'a str>> =
        if delimiter.is_empty() {
            Box::new(std::iter::once(input))
        } else {
            Box::new(input.split(delimiter))
        };

    Box::new(pieces.map(str::trim).filter(|piece| !piece.is_empty()))
}
