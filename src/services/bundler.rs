use std::path::{Path, PathBuf};

use crate::domain::models::{BundleReport, DocumentRecord};

#[derive(thiserror::Error, Debug)]
pub enum BundleError {
    #[error("source file not found: {0}")]
    MissingSource(String),
}

/// Read every listed source under `base_dir`, in list order.
///
/// All reads happen before any output is opened, so a missing or unreadable
/// source aborts the run with nothing written.
pub fn read_documents(base_dir: &Path, sources: &[String]) -> anyhow::Result<Vec<DocumentRecord>> {
    let mut docs = Vec::with_capacity(sources.len());
    for (pos, source) in sources.iter().enumerate() {
        let path = base_dir.join(source);
        if !path.exists() {
            return Err(BundleError::MissingSource(source.clone()).into());
        }
        let content = std::fs::read_to_string(&path)?;
        log::debug!("read {} ({} bytes)", path.display(), content.len());
        docs.push(DocumentRecord {
            index: pos + 1,
            source: source.clone(),
            content,
        });
    }
    Ok(docs)
}

/// Render the combined document.
///
/// Content is embedded verbatim, unescaped; consumers of the bundle expect
/// the raw source text, so output containing `<`, `>` or `&` is not strict
/// well-formed XML. Tabs are cosmetic. No trailing newline.
pub fn render(documents: &[DocumentRecord]) -> String {
    let mut xml = String::from("<documents>");
    if !documents.is_empty() {
        xml.push('\n');
    }
    for d in documents {
        xml.push_str(&format!("\t<document index=\"{}\">\n", d.index));
        xml.push_str(&format!("\t\t<source>{}</source>\n", d.source));
        xml.push_str(&format!(
            "\t\t<document_content>{}</document_content>\n",
            d.content
        ));
        xml.push_str("\t</document>\n");
    }
    xml.push_str("</documents>");
    xml
}

/// Bundle `sources` from `base_dir` into a single XML document at
/// `output_path`, replacing any existing file there.
pub fn bundle(
    base_dir: &Path,
    sources: &[String],
    output_path: &Path,
) -> anyhow::Result<BundleReport> {
    let docs = read_documents(base_dir, sources)?;
    let xml = render(&docs);
    std::fs::write(output_path, &xml)?;
    log::info!(
        "bundled {} documents into {} ({} bytes)",
        docs.len(),
        output_path.display(),
        xml.len()
    );
    Ok(BundleReport {
        output: output_path.to_string_lossy().to_string(),
        documents: docs.len(),
        bytes: xml.len(),
    })
}

/// Resolve the output path against the base directory when relative, so the
/// default `contracts.xml` lands next to the sources it bundles.
pub fn resolve_output(base_dir: &Path, output: &str) -> PathBuf {
    let p = PathBuf::from(output);
    if p.is_absolute() {
        p
    } else {
        base_dir.join(p)
    }
}
