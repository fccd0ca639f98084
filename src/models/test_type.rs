use serde::{Deserialize, Serialize};

/// Test type tag as it appears on the wire.
///
/// `"2k"` and `"6k"` are the types the summary views know about; anything
/// else coming from the store is carried through untouched so the
/// collection never rejects a record over an unexpected tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum TestType {
    TwoK,
    SixK,
    Other(String),
}

impl TestType {
    pub fn as_str(&self) -> &str {
        match self {
            TestType::TwoK => "2k",
            TestType::SixK => "6k",
            TestType::Other(s) => s.as_str(),
        }
    }

    /// Human label used in trend output ("2 km", "6 km").
    pub fn label(&self) -> String {
        match self {
            TestType::TwoK => "2 km".to_string(),
            TestType::SixK => "6 km".to_string(),
            TestType::Other(s) => s.clone(),
        }
    }
}

impl From<String> for TestType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "2k" => TestType::TwoK,
            "6k" => TestType::SixK,
            _ => TestType::Other(s),
        }
    }
}

impl From<&str> for TestType {
    fn from(s: &str) -> Self {
        TestType::from(s.to_string())
    }
}

impl From<TestType> for String {
    fn from(t: TestType) -> Self {
        t.as_str().to_string()
    }
}

impl std::fmt::Display for TestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
