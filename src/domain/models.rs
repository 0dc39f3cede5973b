use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// One input file's contribution to the output, assembled transiently
/// while rendering and discarded afterwards.
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    /// 1-based position in the input list.
    pub index: usize,
    /// Bare filename as supplied, no path prefix.
    pub source: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct BundleReport {
    pub output: String,
    pub documents: usize,
    pub bytes: usize,
}

#[derive(Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct CheckReport {
    pub overall: String,
    pub sources: Vec<CheckItem>,
}
