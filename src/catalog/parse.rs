use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::Value;

use crate::facet::FacetKey;

use super::model::{Artifact, Catalog};

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawArtifact {
    id: Value,
    #[serde(default, alias = "명칭", alias = "title")]
    name: Option<String>,
    #[serde(default, alias = "설명")]
    description: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    images: Option<Vec<String>>,
    #[serde(default, alias = "related_items")]
    related: Option<Vec<Value>>,
    #[serde(default, alias = "형태")]
    shape: Option<String>,
    #[serde(default, alias = "재질", alias = "재질_분류")]
    material: Option<String>,
    #[serde(default, alias = "시대")]
    era: Option<String>,
    #[serde(default, alias = "용도")]
    usage: Option<String>,
}

impl RawArtifact {
    fn into_artifact(self) -> Result<Artifact> {
        let id = id_text(&self.id)
            .ok_or_else(|| anyhow!("artifact id must be a string or integer"))?;
        if id.is_empty() {
            return Err(anyhow!("artifact id is empty"));
        }

        let mut artifact = Artifact::new(id);
        if let Some(name) = self
            .name
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty())
        {
            artifact.name = name;
        }
        artifact.description = self.description.filter(|text| !text.trim().is_empty());
        artifact.thumbnail = self.thumbnail.filter(|path| !path.trim().is_empty());
        artifact.images = self.images.unwrap_or_default();
        artifact.related = self
            .related
            .unwrap_or_default()
            .iter()
            .filter_map(id_text)
            .filter(|related| !related.is_empty())
            .collect();

        let facets = [
            (FacetKey::Shape, self.shape),
            (FacetKey::Material, self.material),
            (FacetKey::Era, self.era),
            (FacetKey::Usage, self.usage),
        ];
        for (key, value) in facets {
            let value = value
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty());
            artifact.set_facet(key, value);
        }

        Ok(artifact)
    }
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.trim().to_owned()),
        Value::Number(number) if number.is_i64() || number.is_u64() => Some(number.to_string()),
        _ => None,
    }
}

pub fn parse_catalog(raw: &str) -> Result<Catalog> {
    let parsed: Value = serde_json::from_str(raw).context("invalid catalog JSON")?;

    let entries = match &parsed {
        Value::Array(entries) => entries,
        Value::Object(object) => object
            .get("artifacts")
            .and_then(Value::as_array)
            .ok_or_else(|| anyhow!("catalog object has no \"artifacts\" array"))?,
        _ => return Err(anyhow!("catalog JSON must be an array or an object")),
    };

    let mut artifacts = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let raw_artifact = RawArtifact::deserialize(entry)
            .with_context(|| format!("invalid artifact record at index {index}"))?;
        let artifact = raw_artifact
            .into_artifact()
            .with_context(|| format!("invalid artifact record at index {index}"))?;
        artifacts.push(artifact);
    }

    Catalog::new(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_korean_columns_and_numeric_ids() {
        let catalog = parse_catalog(
            r#"[
                {"id": 1, "명칭": "청동 거울", "형태": "원형", "재질_분류": "금속", "시대": "고려", "용도": "의생활"},
                {"id": "2", "name": "벼루", "shape": "사각형, 원형", "material": "돌", "era": null}
            ]"#,
        )
        .expect("valid catalog");

        assert_eq!(catalog.len(), 2);
        let mirror = catalog.get("1").expect("numeric id is stringified");
        assert_eq!(mirror.name, "청동 거울");
        assert_eq!(mirror.facet(FacetKey::Material), Some("금속"));
        assert_eq!(mirror.facet(FacetKey::Usage), Some("의생활"));

        let inkstone = catalog.get("2").expect("string id");
        assert_eq!(inkstone.facet(FacetKey::Shape), Some("사각형, 원형"));
        assert_eq!(inkstone.facet(FacetKey::Era), None);
        assert_eq!(inkstone.facet(FacetKey::Usage), None);
    }

    #[test]
    fn accepts_artifacts_wrapper_and_drops_blank_facets() {
        let catalog = parse_catalog(
            r#"{"artifacts": [{"id": "a", "형태": "  ", "재질": "흙", "related": ["b", 7]}]}"#,
        )
        .expect("wrapped catalog");

        let artifact = catalog.get("a").expect("artifact a");
        assert_eq!(artifact.name, "a");
        assert_eq!(artifact.facet(FacetKey::Shape), None);
        assert_eq!(artifact.facet(FacetKey::Material), Some("흙"));
        assert_eq!(artifact.related, vec!["b".to_owned(), "7".to_owned()]);
    }

    #[test]
    fn keeps_record_order() {
        let catalog = parse_catalog(r#"[{"id": "z"}, {"id": "m"}, {"id": "a"}]"#).expect("valid");
        let ids = catalog.iter().map(|a| a.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["z", "m", "a"]);
    }

    #[test]
    fn rejects_bad_ids_and_duplicates() {
        assert!(parse_catalog(r#"[{"id": {"nested": true}}]"#).is_err());
        assert!(parse_catalog(r#"[{"id": ""}]"#).is_err());
        assert!(parse_catalog(r#"[{"id": "x"}, {"id": "x"}]"#).is_err());
        assert!(parse_catalog(r#""just a string""#).is_err());
        assert!(parse_catalog(r#"{"items": []}"#).is_err());
    }

    #[test]
    fn empty_array_is_an_empty_catalog() {
        let catalog = parse_catalog("[]").expect("empty catalog");
        assert!(catalog.is_empty());
    }
}
