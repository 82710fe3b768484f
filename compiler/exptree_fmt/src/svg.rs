//! SVG diagram rendering.
//!
//! Layout works in two linear passes over the arena instead of recursing:
//! children always precede their parent, so a forward pass can size every
//! subtree and a backward pass can place every child under its parent.

use std::fmt;

use exptree_ir::{ExprId, ExprKind, ExprTree};

/// Minimum horizontal space for a node.
const NODE_WIDTH: f64 = 48.0;
/// Horizontal gap between sibling subtrees.
const SIBLING_GAP: f64 = 16.0;
/// Vertical distance between levels.
const LEVEL_HEIGHT: f64 = 90.0;
const NODE_RADIUS: f64 = 18.0;
const TOP_MARGIN: f64 = 24.0;
const BOTTOM_MARGIN: f64 = 40.0;
const SIDE_MARGIN: f64 = 20.0;
const MIN_CANVAS_WIDTH: f64 = 480.0;

const LEFT_EDGE_COLOR: &str = "#57e6b6";
const RIGHT_EDGE_COLOR: &str = "#60a5fa";
const NODE_FILL: &str = "#07192a";
const NODE_STROKE: &str = "#88ffd1";
const LABEL_COLOR: &str = "#e6eef6";

/// Render `tree` as a standalone SVG document.
pub fn render_svg(tree: &ExprTree) -> String {
    TreeSvg(tree).to_string()
}

/// `Display` adapter for [`render_svg`].
pub struct TreeSvg<'a>(pub &'a ExprTree);

/// Node centre.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Point {
    x: f64,
    y: f64,
}

struct Layout {
    /// Centre per node; `None` for nodes not reachable from the root.
    positions: Vec<Option<Point>>,
    canvas_width: f64,
    canvas_height: f64,
}

impl Layout {
    #[expect(
        clippy::cast_precision_loss,
        reason = "tree depth is far below 2^52"
    )]
    fn compute(tree: &ExprTree) -> Self {
        let arena = tree.arena();
        let mut widths: Vec<f64> = Vec::with_capacity(arena.len());
        for id in arena.ids() {
            let width = match arena.get(id) {
                ExprKind::Literal(_) => NODE_WIDTH,
                ExprKind::Binary { left, right, .. } => {
                    NODE_WIDTH.max(widths[left.index()] + widths[right.index()] + SIBLING_GAP)
                }
            };
            widths.push(width);
        }

        let root = tree.root();
        let root_width = widths[root.index()];
        let mut positions = vec![None; arena.len()];
        positions[root.index()] = Some(Point {
            x: root_width / 2.0 + SIDE_MARGIN,
            y: TOP_MARGIN,
        });

        for id in arena.ids().rev() {
            let (Some(parent), Some((left, right))) = (positions[id.index()], tree.children(id))
            else {
                continue;
            };
            let left_width = widths[left.index()];
            let right_width = widths[right.index()];
            let start = parent.x - (left_width + right_width + SIBLING_GAP) / 2.0;
            let y = parent.y + LEVEL_HEIGHT;
            positions[left.index()] = Some(Point {
                x: start + left_width / 2.0,
                y,
            });
            positions[right.index()] = Some(Point {
                x: start + left_width + SIBLING_GAP + right_width / 2.0,
                y,
            });
        }

        Layout {
            positions,
            canvas_width: MIN_CANVAS_WIDTH.max(root_width + 2.0 * SIDE_MARGIN),
            canvas_height: TOP_MARGIN + tree.depth() as f64 * LEVEL_HEIGHT + BOTTOM_MARGIN,
        }
    }

    fn position(&self, id: ExprId) -> Option<Point> {
        self.positions[id.index()]
    }
}

impl fmt::Display for TreeSvg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.0;
        let layout = Layout::compute(tree);
        let (width, height) = (layout.canvas_width, layout.canvas_height);

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
        )?;

        // Edges first so nodes paint over line ends.
        for id in tree.arena().ids().rev() {
            let (Some(from), Some((left, right))) = (layout.position(id), tree.children(id)) else {
                continue;
            };
            for (child, color) in [(left, LEFT_EDGE_COLOR), (right, RIGHT_EDGE_COLOR)] {
                if let Some(to) = layout.position(child) {
                    writeln!(
                        f,
                        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1.5"/>"#,
                        from.x,
                        from.y + NODE_RADIUS,
                        to.x,
                        to.y - NODE_RADIUS,
                    )?;
                }
            }
        }

        for id in tree.arena().ids().rev() {
            let Some(at) = layout.position(id) else {
                continue;
            };
            let label = XmlEscaped(tree.value(id));
            writeln!(
                f,
                r#"  <g><circle cx="{}" cy="{}" r="{NODE_RADIUS}" fill="{NODE_FILL}" stroke="{NODE_STROKE}" stroke-width="1"/><text x="{}" y="{}" fill="{LABEL_COLOR}" font-size="12" text-anchor="middle">{label}</text></g>"#,
                at.x,
                at.y,
                at.x,
                at.y + 5.0,
            )?;
        }

        writeln!(f, "</svg>")
    }
}

/// Escapes the five XML special characters.
struct XmlEscaped<'a>(&'a str);

impl fmt::Display for XmlEscaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                _ => fmt::Write::write_char(f, c)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
