use log::{ debug, trace };
use std::fs;
use std::io::ErrorKind;

use crate::errors::CheckError;
use crate::implementations::decode::percent_decode;
use crate::models::artifact::ArtifactRef;
use crate::models::rule::{ ContentRule, PayloadRule };
use crate::models::verification::PayloadSearch;

/// Check that the artifact exists and is non-empty, returning its size in bytes
pub fn check_existence(artifact: &ArtifactRef) -> Result<u64, CheckError> {
    let path = artifact.path().display().to_string();
    let metadata = match fs::metadata(artifact.path()) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(CheckError::MissingArtifact {
                artifact: artifact.kind().description().to_string(),
                path,
            });
        }
        Err(e) => {
            return Err(CheckError::UnreadableArtifact {
                artifact: artifact.kind().description().to_string(),
                path,
                detail: e.to_string(),
            });
        }
    };

    if metadata.len() == 0 {
        return Err(CheckError::EmptyArtifact {
            artifact: artifact.kind().description().to_string(),
            path,
        });
    }

    debug!("{} present ({} bytes)", artifact.name(), metadata.len());
    Ok(metadata.len())
}

/// Read the full artifact as UTF-8 text
pub fn read_artifact(artifact: &ArtifactRef) -> Result<String, CheckError> {
    fs::read_to_string(artifact.path()).map_err(|e| CheckError::UnreadableArtifact {
        artifact: artifact.kind().description().to_string(),
        path: artifact.path().display().to_string(),
        detail: e.to_string(),
    })
}

/// Apply a content rule to `text`, collecting every violation.
///
/// All required markers are checked before the forbidden ones and neither
/// loop stops at the first hit.
pub fn check_content(file: &str, text: &str, rule: &ContentRule) -> Vec<CheckError> {
    let missing = rule.required
        .iter()
        .filter(|marker| !text.contains(marker.as_str()))
        .map(|marker| CheckError::MissingMarker {
            file: file.to_string(),
            marker: marker.clone(),
        });

    let forbidden = rule.forbidden
        .iter()
        .filter(|marker| text.contains(marker.as_str()))
        .map(|marker| CheckError::ForbiddenMarker {
            file: file.to_string(),
            marker: marker.clone(),
        });

    missing.chain(forbidden).collect()
}

/// The trimmed payload must start with the script URI scheme
pub fn check_payload_prefix(text: &str, prefix: &str) -> Result<(), CheckError> {
    if text.trim().starts_with(prefix) {
        Ok(())
    } else {
        Err(CheckError::InvalidPayloadPrefix {
            expected: prefix.to_string(),
        })
    }
}

/// Look for the style injection logic, decoding the payload only when the
/// raw markers are absent.
pub fn search_payload(raw: &str, rule: &PayloadRule) -> PayloadSearch {
    let raw = raw.trim();
    if let Some(marker) = rule.raw_markers.iter().find(|marker| raw.contains(marker.as_str())) {
        trace!("Injection marker {:?} found in raw payload", marker);
        return PayloadSearch::FoundRaw(marker.clone());
    }

    debug!("No raw injection marker, decoding {} byte payload", raw.len());
    if percent_decode(raw).contains(rule.decoded_marker.as_str()) {
        PayloadSearch::FoundDecoded
    } else {
        PayloadSearch::NotFound
    }
}

/// Fail with `InjectionLogicMissing` when `search_payload` finds nothing
pub fn check_injection_logic(
    file: &str,
    raw: &str,
    rule: &PayloadRule
) -> Result<PayloadSearch, CheckError> {
    match search_payload(raw, rule) {
        PayloadSearch::NotFound =>
            Err(CheckError::InjectionLogicMissing {
                file: file.to_string(),
            }),
        found => Ok(found),
    }
}
