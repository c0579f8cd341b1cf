//! The annotation pipeline: validate the input pair, load both files,
//! collect leaf bounds, draw the highlight boxes, save the result.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::bounds::Bounds;
use crate::dump::{self, DumpLoadError, UiElement};
use crate::error::{Error, Result};
use crate::highlight;

/// Usage line printed on any argument-shape violation.
pub const USAGE: &str = "Incorrect usage; use as uihl <path>.png <path>.xml";

/// A validated input pair: a screenshot and the UI dump for the same screen.
#[derive(Debug, Clone)]
pub struct Job {
    pub image_path: PathBuf,
    pub xml_path: PathBuf,
    /// Where the annotated copy goes: the image path with `.png` replaced by
    /// `-hl.png`.
    pub output_path: PathBuf,
}

impl Job {
    /// Validate the two positional arguments: `<path>.png` then `<path>.xml`
    /// with identical `<path>` prefixes, both suffix checks exact and
    /// case-sensitive. Returns `None` on any violation. No file I/O happens
    /// here; existence is checked by the loads.
    pub fn validate(image_arg: &str, xml_arg: &str) -> Option<Job> {
        let image_base = image_arg.strip_suffix(".png")?;
        let xml_base = xml_arg.strip_suffix(".xml")?;
        if image_base != xml_base {
            return None;
        }
        Some(Job {
            image_path: PathBuf::from(image_arg),
            xml_path: PathBuf::from(xml_arg),
            output_path: PathBuf::from(format!("{image_base}-hl.png")),
        })
    }
}

/// Run the pipeline for a validated job. The dump is loaded before the
/// image, so when both files are broken the dump diagnostic wins. Any error
/// aborts the run before the output file is written.
pub fn run(job: &Job) -> Result<()> {
    let root = dump::parse_dump_file(&job.xml_path).map_err(|e| match e {
        DumpLoadError::Io(source) => Error::DocumentRead {
            path: job.xml_path.clone(),
            source,
        },
        DumpLoadError::Parse(source) => Error::DocumentParse {
            path: job.xml_path.clone(),
            source,
        },
    })?;
    info!(path = %job.xml_path.display(), "loaded UI dump");

    let mut image = image::open(&job.image_path)
        .map_err(|source| Error::ImageLoad {
            path: job.image_path.clone(),
            source,
        })?
        .to_rgba8();
    info!(path = %job.image_path.display(), "loaded screenshot");

    let leaves = match &root {
        Some(root) => root.leaves(),
        None => Vec::new(),
    };
    let bounds = leaf_bounds(&leaves)?;
    debug!(count = bounds.len(), "collected leaf bounds");

    highlight::outline_all(&mut image, &bounds);

    image.save(&job.output_path).map_err(|source| Error::ImageSave {
        path: job.output_path.clone(),
        source,
    })?;
    info!(path = %job.output_path.display(), "saved annotated image");

    Ok(())
}

/// Parse the `bounds` attribute of every leaf, in document order. The first
/// missing or malformed value is fatal.
fn leaf_bounds(leaves: &[&UiElement]) -> Result<Vec<Bounds>> {
    leaves
        .iter()
        .map(|elem| {
            let value = elem.attribute("bounds").ok_or_else(|| Error::MissingBounds {
                tag: elem.tag.clone(),
            })?;
            Bounds::parse(value).map_err(|source| Error::MalformedBounds {
                tag: elem.tag.clone(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_matching_pair_and_derives_output() {
        let job = Job::validate("shots/home.png", "shots/home.xml").unwrap();
        assert_eq!(job.image_path, PathBuf::from("shots/home.png"));
        assert_eq!(job.xml_path, PathBuf::from("shots/home.xml"));
        assert_eq!(job.output_path, PathBuf::from("shots/home-hl.png"));
    }

    #[test]
    fn rejects_mismatched_base_names() {
        assert!(Job::validate("foo.png", "bar.xml").is_none());
    }

    #[test]
    fn rejects_wrong_suffixes() {
        assert!(Job::validate("shot.jpg", "shot.xml").is_none());
        assert!(Job::validate("shot.png", "shot.txt").is_none());
        assert!(Job::validate("shot.xml", "shot.png").is_none());
        assert!(Job::validate("shot", "shot.xml").is_none());
    }

    #[test]
    fn suffix_check_is_case_sensitive() {
        assert!(Job::validate("shot.PNG", "shot.xml").is_none());
        assert!(Job::validate("shot.png", "shot.XML").is_none());
    }

    #[test]
    fn missing_bounds_attribute_is_fatal() {
        let root = dump::parse_dump("<hierarchy><node index=\"0\"/></hierarchy>")
            .unwrap()
            .unwrap();
        let leaves = root.leaves();
        let err = leaf_bounds(&leaves).unwrap_err();
        assert!(matches!(err, Error::MissingBounds { ref tag } if tag == "node"));
    }

    #[test]
    fn leaf_bounds_follow_document_order() {
        let xml = r#"
            <hierarchy>
                <node bounds="[0,0][10,10]">
                    <node bounds="[1,1][2,2]"/>
                    <node bounds="[3,3][4,4]"/>
                </node>
                <node bounds="[5,5][6,6]"/>
            </hierarchy>"#;
        let root = dump::parse_dump(xml).unwrap().unwrap();
        let leaves = root.leaves();
        let bounds = leaf_bounds(&leaves).unwrap();
        let xs: Vec<i32> = bounds.iter().map(|b| b.top_left.x).collect();
        assert_eq!(xs, [1, 3, 5]);
    }
}
