//! Raw form payloads as submitted by the browser.
//!
//! Nothing here is validated: values are trimmed, blanks become `None`, and
//! list fields keep their submitted positions. Validation lives in
//! [`super::validation`].
//!
//! Every form is read from ordered urlencoded pairs, so a key submitted more
//! than once never rejects the request. Scalar keys keep the last value.

/// Number of list positions kept for `photoUrls` and `tags[N][name]`.
///
/// Entries past the cap are not stored; the form records the overflow so
/// validation can reject it.
pub const MAX_LIST_ENTRIES: usize = 64;

/// The "add pet" form.
///
/// Built from ordered urlencoded pairs because the list fields use bracketed
/// keys (`photoUrls[]`, `tags[2][name]`) that flat form decoding cannot express.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetForm {
    pub id: Option<String>,
    pub name: Option<String>,
    pub category_id: Option<String>,
    pub category_name: Option<String>,
    /// Photo URL inputs by position; blank inputs are kept as empty strings.
    pub photo_urls: Vec<String>,
    /// Tag name inputs by position; blank inputs are kept as empty strings.
    pub tags: Vec<String>,
    pub status: Option<String>,
    /// A photo URL arrived at or past [`MAX_LIST_ENTRIES`].
    pub photo_urls_overflow: bool,
    /// A tag arrived at or past [`MAX_LIST_ENTRIES`].
    pub tags_overflow: bool,
}

impl PetForm {
    /// Collect a form from decoded urlencoded pairs.
    ///
    /// Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut form = Self::default();

        for (key, value) in pairs {
            let key = key.as_ref();
            let value = value.as_ref().trim();

            match key {
                "id" => form.id = non_blank(value),
                "name" => form.name = non_blank(value),
                "category_id" => form.category_id = non_blank(value),
                "category_name" => form.category_name = non_blank(value),
                "status" => form.status = non_blank(value),
                "photoUrls" => {
                    if !place(&mut form.photo_urls, Position::Next, value) {
                        form.photo_urls_overflow = true;
                    }
                }
                _ => {
                    if let Some(position) = indexed_key(key, "photoUrls", "") {
                        if !place(&mut form.photo_urls, position, value) {
                            form.photo_urls_overflow = true;
                        }
                    } else if let Some(position) = indexed_key(key, "tags", "[name]") {
                        if !place(&mut form.tags, position, value) {
                            form.tags_overflow = true;
                        }
                    }
                }
            }
        }

        form
    }
}

/// The "edit pet" form. The pet id travels in the URL path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePetForm {
    pub name: Option<String>,
    pub status: Option<String>,
    /// Method spoofing field (`_method`); HTML forms cannot submit DELETE.
    pub method: Option<String>,
}

impl UpdatePetForm {
    /// Collect the form from decoded urlencoded pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut form = Self::default();

        for (key, value) in pairs {
            let value = value.as_ref().trim();
            match key.as_ref() {
                "name" => form.name = non_blank(value),
                "status" => form.status = non_blank(value),
                "_method" => form.method = non_blank(value),
                _ => {}
            }
        }

        form
    }

    /// Whether the form asks for a delete instead of an update.
    pub fn is_delete(&self) -> bool {
        self.method
            .as_deref()
            .is_some_and(|method| method.eq_ignore_ascii_case("delete"))
    }
}

impl From<UpdatePetForm> for PetForm {
    fn from(form: UpdatePetForm) -> Self {
        Self {
            name: form.name,
            status: form.status,
            ..Default::default()
        }
    }
}

/// The "search pet by id" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub id: Option<String>,
}

impl SearchForm {
    /// Collect the form from decoded urlencoded pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let id = pairs
            .into_iter()
            .filter(|(key, _)| key.as_ref() == "id")
            .last()
            .and_then(|(_, value)| non_blank(value.as_ref().trim()));

        Self { id }
    }
}

/// Where a list entry goes: an explicit index or "append".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Index(usize),
    Next,
}

fn non_blank(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Match `{base}[N]{suffix}` or `{base}[]{suffix}`.
fn indexed_key(key: &str, base: &str, suffix: &str) -> Option<Position> {
    let inner = key
        .strip_prefix(base)?
        .strip_prefix('[')?
        .strip_suffix(suffix)?
        .strip_suffix(']')?;

    if inner.is_empty() {
        return Some(Position::Next);
    }
    // Digits too long for usize are past the cap anyway.
    if inner.bytes().all(|b| b.is_ascii_digit()) {
        return Some(Position::Index(inner.parse().unwrap_or(usize::MAX)));
    }
    None
}

/// Store a list entry. Returns `false` when the position is past the cap.
fn place(list: &mut Vec<String>, position: Position, value: &str) -> bool {
    let index = match position {
        Position::Index(index) => index,
        Position::Next => list.len(),
    };
    if index >= MAX_LIST_ENTRIES {
        return false;
    }
    if list.len() <= index {
        list.resize(index + 1, String::new());
    }
    list[index] = value.to_string();
    true
}
