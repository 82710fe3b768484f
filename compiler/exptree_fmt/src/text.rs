//! Box-drawing text rendering.

use std::fmt;

use exptree_ir::{ExprId, ExprTree};
use exptree_stack::ensure_sufficient_stack;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUE: &str = "│   ";
const BLANK: &str = "    ";

/// Render `tree` as indented text, root first, left child above right child.
///
/// ```text
/// +
/// ├── 3
/// └── *
///     ├── 4
///     └── 2
/// ```
pub fn render(tree: &ExprTree) -> String {
    TreeText(tree).to_string()
}

/// `Display` adapter for [`render`]. Every line, including the last, ends in `\n`.
pub struct TreeText<'a>(pub &'a ExprTree);

impl fmt::Display for TreeText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.0;
        writeln!(f, "{}", tree.value(tree.root()))?;
        let mut prefix = String::new();
        write_children(f, tree, tree.root(), &mut prefix)
    }
}

fn write_children(
    f: &mut fmt::Formatter<'_>,
    tree: &ExprTree,
    id: ExprId,
    prefix: &mut String,
) -> fmt::Result {
    let Some((left, right)) = tree.children(id) else {
        return Ok(());
    };
    ensure_sufficient_stack(|| {
        for (child, is_last) in [(left, false), (right, true)] {
            let branch = if is_last { LAST_BRANCH } else { BRANCH };
            writeln!(f, "{prefix}{branch}{}", tree.value(child))?;

            let depth = prefix.len();
            prefix.push_str(if is_last { BLANK } else { CONTINUE });
            write_children(f, tree, child, prefix)?;
            prefix.truncate(depth);
        }
        Ok(())
    })
}
