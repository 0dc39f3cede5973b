use std::path::Path;

use crate::domain::models::{CheckItem, CheckReport};

/// Report each listed source as `ok`, `missing`, or `unreadable` without
/// touching the output path.
pub fn check_sources(base_dir: &Path, sources: &[String]) -> CheckReport {
    let mut items = Vec::with_capacity(sources.len());
    for source in sources {
        let path = base_dir.join(source);
        let status = if !path.exists() {
            "missing"
        } else if std::fs::File::open(&path).is_err() {
            "unreadable"
        } else {
            "ok"
        };
        items.push(CheckItem {
            name: source.clone(),
            status: status.to_string(),
        });
    }
    let overall = if items.iter().all(|i| i.status == "ok") {
        "ok"
    } else {
        "fail"
    };
    CheckReport {
        overall: overall.to_string(),
        sources: items,
    }
}
