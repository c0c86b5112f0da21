//! Build-time content: terminal transcripts, their annotations and the
//! feature groups shown below the hero.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{Result, ShowcaseError};

const PR_STATUS: &str = "gh pr status

Relevant pull requests in cli/cli

Current branch
There is no pull request associated with [fix-homepage-bug]

Created by you
You have no open pull requests

Requesting a code review from you
#100 Fix footer on homepage [fix-homepage-footer]
✓ Checks passing - Review pending";

const ISSUE_LIST: &str = "gh issue list

Showing 4 of 4 issues in cli/cli

#16 Improving interactions with protected branches
#14 PR commands on a detached head
#13 Support for GitHub Enterprise (enhancement)
#8 Add an easier upgrade command (bug)";

const PR_CHECKOUT: &str = "gh pr checkout 12
remote: Enumerating objects: 66, done.
remote: Counting objects: 100% (66/66), done.
remote: Total 83 (delta 66), reused 66 (delta 66), pack-reused 17
Unpacking objects: 100% (83/83), done.
From https://github.com/owner/repo
* [new ref] refs/pull/8896/head -> patch-2
M README.md
Switched to branch 'patch-2'";

static BUILTIN: Lazy<Deck> = Lazy::new(|| Deck {
    snippets: vec![
        Cow::Borrowed(PR_STATUS),
        Cow::Borrowed(ISSUE_LIST),
        Cow::Borrowed(PR_CHECKOUT),
    ],
    annotations: vec![
        Annotation::new("gh pr status", "List pull requests"),
        Annotation::new("gh issue list", "List issues"),
        Annotation::new("gh pr checkout 12", "Checkout a pull request"),
    ],
});

/// Command label and one-line description paired with a snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub command: Cow<'static, str>,
    pub description: Cow<'static, str>,
}

impl Annotation {
    pub const fn new(command: &'static str, description: &'static str) -> Self {
        Self {
            command: Cow::Borrowed(command),
            description: Cow::Borrowed(description),
        }
    }
}

/// Index-aligned transcripts and annotations.
///
/// Construction goes through [`Deck::from_parts`], which guarantees the two
/// sequences have the same non-zero length. Everything downstream relies on
/// that to index both sides with the same position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    snippets: Vec<Cow<'static, str>>,
    annotations: Vec<Annotation>,
}

impl Deck {
    pub fn from_parts(
        snippets: Vec<Cow<'static, str>>,
        annotations: Vec<Annotation>,
    ) -> Result<Self> {
        if snippets.len() != annotations.len() {
            return Err(ShowcaseError::MismatchedDeck {
                snippets: snippets.len(),
                annotations: annotations.len(),
            });
        }
        if snippets.is_empty() {
            return Err(ShowcaseError::EmptyDeck);
        }
        Ok(Self {
            snippets,
            annotations,
        })
    }

    /// The three `gh` transcripts shown on the landing page.
    pub fn builtin() -> &'static Deck {
        &BUILTIN
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn snippet(&self, index: usize) -> Option<&str> {
        self.snippets.get(index).map(|s| s.as_ref())
    }

    pub fn annotation(&self, index: usize) -> Option<&Annotation> {
        self.annotations.get(index)
    }
}

/// Heading plus the feature pills rendered under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureGroup {
    pub heading: &'static str,
    pub items: [&'static str; 3],
}

pub const FEATURE_GROUPS: [FeatureGroup; 3] = [
    FeatureGroup {
        heading: "Make your workflow easier",
        items: [
            "Issue management",
            "Pull request management",
            "Repo management",
        ],
    },
    FeatureGroup {
        heading: "Scripting is the way",
        items: [
            "Integrate shell",
            "Script github actions",
            "Script github pages",
        ],
    },
    FeatureGroup {
        heading: "AI is the new partner",
        items: [
            "Automated testing",
            "Predictive typing",
            "Integration with AI tools",
        ],
    },
];
