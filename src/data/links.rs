use crate::constants::DRIVE_THUMBNAIL_BASE;
use crate::error::{AppError, Result};

/// Rewrite a Drive share link (`.../d/<id>/view...`) into a directly
/// embeddable thumbnail URL. Strict substring extraction, no URL parsing.
pub fn convert_drive_link(link: &str) -> Result<String> {
    let (_, after) = link
        .split_once("/d/")
        .ok_or_else(|| AppError::LinkFormat(format!("missing '/d/' in '{}'", link)))?;
    if !after.contains("/view") {
        return Err(AppError::LinkFormat(format!("missing '/view' in '{}'", link)));
    }

    // The id ends at whichever marker comes first: the next `/d/` or `/view`
    let segment = after.split("/d/").next().unwrap_or(after);
    let file_id = segment.split("/view").next().unwrap_or(segment);

    Ok(format!("{}{}", DRIVE_THUMBNAIL_BASE, file_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_share_link() {
        assert_eq!(
            convert_drive_link("https://drive.google.com/file/d/ABC123/view?usp=sharing").unwrap(),
            "https://drive.google.com/thumbnail?id=ABC123"
        );
    }

    #[test]
    fn takes_first_markers() {
        assert_eq!(
            convert_drive_link("https://drive.google.com/file/d/x-Y_z/view/d/other/view").unwrap(),
            "https://drive.google.com/thumbnail?id=x-Y_z"
        );
    }

    #[test]
    fn id_ends_at_next_drive_marker() {
        assert_eq!(
            convert_drive_link("https://x/d/AB/view/d/CD/view").unwrap(),
            "https://drive.google.com/thumbnail?id=AB"
        );
        assert_eq!(
            convert_drive_link("https://x/d/AB/d/CD/view").unwrap(),
            "https://drive.google.com/thumbnail?id=AB"
        );
    }

    #[test]
    fn missing_markers_are_errors() {
        assert!(matches!(
            convert_drive_link("https://drive.google.com/open?id=ABC123"),
            Err(AppError::LinkFormat(_))
        ));
        assert!(matches!(
            convert_drive_link("https://drive.google.com/file/d/ABC123/edit"),
            Err(AppError::LinkFormat(_))
        ));
    }
}
