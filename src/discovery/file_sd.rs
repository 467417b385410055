//! Prometheus `file_sd` document rendering.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::discovery::{BuildError, ScrapeConfigBuilder};

/// One target group in a `file_sd` document.
#[derive(Debug, Serialize)]
struct TargetGroup {
    targets: Vec<String>,
    labels: BTreeMap<String, String>,
}

/// Builder producing a `file_sd` JSON array with one target group per
/// namespace, labeled with the namespace it came from.
pub struct FileSdBuilder;

impl ScrapeConfigBuilder for FileSdBuilder {
    fn build(&self, namespaces: &[String]) -> Result<String, BuildError> {
        let groups: Vec<TargetGroup> = namespaces
            .iter()
            .map(|namespace| TargetGroup {
                targets: vec![namespace.clone()],
                labels: BTreeMap::from([("namespace".to_string(), namespace.clone())]),
            })
            .collect();

        Ok(serde_json::to_string(&groups)?)
    }
}
