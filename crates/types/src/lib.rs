/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
    /// The input text contained a comma, which is reserved as a list separator
    #[error("Text cannot contain a comma")]
    ContainsComma,
}

/// A specialty tag as displayed in filter options and carried in the URL.
///
/// This type wraps a `String` and guarantees it contains at least one
/// non-whitespace character and no commas. The comma restriction exists
/// because selected tags travel in the URL as a comma-joined list, so a
/// comma inside a tag would be indistinguishable from a separator.
/// The input is trimmed of leading and trailing whitespace during
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpecialtyTag(String);

impl SpecialtyTag {
    /// Creates a new `SpecialtyTag` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the
    /// trimmed result is empty, or the input contains a comma, an error is
    /// returned.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(SpecialtyTag)` if the trimmed input is non-empty and
    /// comma-free, `Err(TextError::Empty)` if it's empty or whitespace-only,
    /// or `Err(TextError::ContainsComma)` if it contains a comma.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        if trimmed.contains(',') {
            return Err(TextError::ContainsComma);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpecialtyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SpecialtyTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for SpecialtyTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for SpecialtyTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SpecialtyTag::new(&s).map_err(serde::de::Error::custom)
    }
}
