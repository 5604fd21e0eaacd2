//! Removal policy for injected ad and tracker scripts.
//!
//! Embedded players tend to drag third-party scripts into the page. The
//! policy half here is a pure predicate over a script URL; the observer
//! half walks batches of inserted DOM subtrees (reduced to a minimal
//! node representation) and reports which script nodes to remove. The
//! platform hook owning the real DOM performs the removal, so this
//! stays best-effort and side-effect free.

/// Substrings identifying ad and analytics script hosts. Matching is
/// case-insensitive anywhere in the URL.
const DISALLOWED_SRC_MARKERS: &[&str] = &[
    "doubleclick",
    "adservice",
    "googlesyndication",
    "google-analytics",
    "googletagmanager",
    "adsbygoogle",
    "popads",
    "taboola",
    "outbrain",
];

/// True when a script with this `src` must not run.
pub fn is_disallowed_script_src(src: &str) -> bool {
    let folded = src.to_lowercase();
    DISALLOWED_SRC_MARKERS
        .iter()
        .any(|marker| folded.contains(marker))
}

/// Minimal view of a DOM node handed to the observer: enough to find
/// script elements and their sources anywhere in an inserted subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertedNode {
    /// Lower-case tag name, e.g. `"script"` or `"div"`.
    pub tag: String,
    /// `src` attribute, when present.
    pub src: Option<String>,
    pub children: Vec<InsertedNode>,
}

impl InsertedNode {
    pub fn element(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            src: None,
            children: Vec::new(),
        }
    }

    pub fn script(src: &str) -> Self {
        Self {
            tag: "script".to_string(),
            src: Some(src.to_string()),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<InsertedNode>) -> Self {
        self.children = children;
        self
    }
}

/// Walks batches of inserted nodes and collects the scripts whose
/// sources fail the policy. Stateless today; kept as a type so the
/// wiring point for suppression counters or a custom marker list stays
/// in one place.
#[derive(Debug, Default)]
pub struct SanitizerObserver;

impl SanitizerObserver {
    pub fn new() -> Self {
        Self
    }

    /// Report every script in `batch` (including nested ones) whose
    /// `src` is disallowed. Returns clones of the offending nodes; no
    /// ordering is guaranteed beyond depth-first within each subtree.
    pub fn process_batch(&self, batch: &[InsertedNode]) -> Vec<InsertedNode> {
        let mut removals = Vec::new();
        for node in batch {
            collect_disallowed(node, &mut removals);
        }
        if !removals.is_empty() {
            log::info!("suppressed {} injected script(s)", removals.len());
        }
        removals
    }
}

fn collect_disallowed(node: &InsertedNode, removals: &mut Vec<InsertedNode>) {
    if node.tag == "script"
        && node
            .src
            .as_deref()
            .is_some_and(is_disallowed_script_src)
    {
        removals.push(node.clone());
    }
    for child in &node.children {
        collect_disallowed(child, removals);
    }
}
