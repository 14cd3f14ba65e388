//! Request and response bodies for the JSON API.

use serde::{Deserialize, Serialize};

use crate::terms::RecognizedTerm;

#[derive(Debug, Clone, Deserialize)]
pub struct RecognizeRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizeResponse {
    pub terms: Vec<RecognizedTerm>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermDto {
    pub term: String,
    pub definition: String,
}
