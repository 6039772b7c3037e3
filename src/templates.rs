//! Static GitHub template bodies and the generator that writes them to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

pub const BUG_REPORT_MD: &str = r#"---
name: Bug Report
about: Create a report to help us improve
title: '[BUG] '
labels: bug
assignees: ''
---

**Describe the bug**
A clear and concise description of what the bug is.

**To Reproduce**
Steps to reproduce the behavior:
1. Go to '...'
2. Click on '....'
3. Scroll down to '....'
4. See error

**Expected behavior**
A clear and concise description of what you expected to happen.

**Screenshots**
If applicable, add screenshots to help explain your problem.

**Environment:**
 - OS: [e.g. Windows, macOS, Linux]
 - Browser: [e.g. Chrome, Firefox, Safari]
 - Version: [e.g. 22]

**Additional context**
Add any other context about the problem here."#;

pub const FEATURE_REQUEST_MD: &str = r#"---
name: Feature Request
about: Suggest an idea for this project
title: '[FEATURE] '
labels: enhancement
assignees: ''
---

**Is your feature request related to a problem? Please describe.**
A clear and concise description of what the problem is. Ex. I'm always frustrated when [...]

**Describe the solution you'd like**
A clear and concise description of what you want to happen.

**Describe alternatives you've considered**
A clear and concise description of any alternative solutions or features you've considered.

**Additional context**
Add any other context or screenshots about the feature request here."#;

pub const PULL_REQUEST_MD: &str = r#"## Description
Please include a summary of the changes and which issue is fixed. Please also include relevant motivation and context.

Fixes # (issue)

## Type of change
Please delete options that are not relevant.

- [ ] Bug fix (non-breaking change which fixes an issue)
- [ ] New feature (non-breaking change which adds functionality)
- [ ] Breaking change (fix or feature that would cause existing functionality to not work as expected)
- [ ] This change requires a documentation update

## How Has This Been Tested?
Please describe the tests that you ran to verify your changes. Provide instructions so we can reproduce.

## Checklist:
- [ ] My code follows the style guidelines of this project
- [ ] I have performed a self-review of my own code
- [ ] I have commented my code, particularly in hard-to-understand areas
- [ ] I have made corresponding changes to the documentation
- [ ] My changes generate no new warnings
- [ ] I have added tests that prove my fix is effective or that my feature works
- [ ] New and existing unit tests pass locally with my changes"#;

/// One generatable template: its CLI name, path relative to the output
/// directory, and literal body.
pub struct Template {
    pub name: &'static str,
    pub rel_path: &'static str,
    pub body: &'static str,
}

pub const TEMPLATES: &[Template] = &[
    Template {
        name: "bug_report",
        rel_path: "ISSUE_TEMPLATE/bug_report.md",
        body: BUG_REPORT_MD,
    },
    Template {
        name: "feature_request",
        rel_path: "ISSUE_TEMPLATE/feature_request.md",
        body: FEATURE_REQUEST_MD,
    },
    Template {
        name: "pull_request",
        rel_path: "PULL_REQUEST_TEMPLATE.md",
        body: PULL_REQUEST_MD,
    },
];

/// Writes the selected templates under `output_dir`, creating parent
/// directories as needed and silently overwriting existing files.
///
/// `None` selects every template. Unknown names are skipped with a warning,
/// not an error. Returns the paths written, in template order.
pub fn generate(output_dir: &Path, names: Option<&[String]>) -> io::Result<Vec<PathBuf>> {
    let selected: Vec<&Template> = match names {
        None => TEMPLATES.iter().collect(),
        Some(names) => names
            .iter()
            .filter_map(|name| {
                let found = TEMPLATES.iter().find(|t| t.name == name.as_str());
                if found.is_none() {
                    warn!("template '{name}' not found");
                }
                found
            })
            .collect(),
    };

    let mut written = Vec::with_capacity(selected.len());
    for template in selected {
        let path = output_dir.join(template.rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, template.body)?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod test {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn generates_all_templates_when_unselected() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join(".github");
        let written = generate(&out, None).unwrap();
        assert_eq!(written.len(), 3);
        assert!(out.join("ISSUE_TEMPLATE/bug_report.md").exists());
        assert!(out.join("ISSUE_TEMPLATE/feature_request.md").exists());
        assert!(out.join("PULL_REQUEST_TEMPLATE.md").exists());
    }

    #[test]
    fn generates_only_the_requested_subset() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join(".github");
        let written = generate(&out, Some(&[String::from("pull_request")])).unwrap();
        assert_eq!(written.len(), 1);
        assert!(out.join("PULL_REQUEST_TEMPLATE.md").exists());
        assert!(!out.join("ISSUE_TEMPLATE").exists());
    }

    #[test]
    fn unknown_names_are_skipped() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join(".github");
        let names = vec![String::from("release_notes"), String::from("bug_report")];
        let written = generate(&out, Some(&names)).unwrap();
        assert_eq!(written.len(), 1);
        assert!(out.join("ISSUE_TEMPLATE/bug_report.md").exists());
    }

    #[test]
    fn an_empty_selection_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join(".github");
        let written = generate(&out, Some(&[])).unwrap();
        assert!(written.is_empty());
        assert!(!out.exists());
    }

    #[test]
    fn existing_files_are_overwritten() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join(".github");
        std::fs::create_dir_all(out.join("ISSUE_TEMPLATE")).unwrap();
        std::fs::write(out.join("ISSUE_TEMPLATE/bug_report.md"), "stale").unwrap();
        generate(&out, Some(&[String::from("bug_report")])).unwrap();
        let body = std::fs::read_to_string(out.join("ISSUE_TEMPLATE/bug_report.md")).unwrap();
        assert!(body.starts_with("---\nname: Bug Report"));
    }
}
