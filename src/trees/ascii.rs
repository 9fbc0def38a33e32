//! ASCII rendering of small binary trees.

use std::fmt::{self, Write};

use crate::trees::BinaryTree;

/// The default maximum number of levels [`AsciiTree`] renders. Wider trees overflow a console.
pub const DEFAULT_MAX_HEIGHT: usize = 8;

/// The result of a render call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The tree was written to the sink.
    Rendered,
    /// The tree was taller than the configured limit. Only a notice was written to the sink.
    TooTall {
        /// The height of the tree.
        height: usize,
        /// The configured limit.
        max_height: usize,
    },
}

/// Renders a [`BinaryTree`] level by level, with `/` and `\` branches between levels.
///
/// The bottom level is as wide as its node labels separated by single spaces, with one column
/// reserved for each empty slot. Every level above it splits that width into equal slots, one for
/// each potential node, and centres each label in its slot.
///
/// # Example
/// ```rust
/// use rmq_trees::rmq::CartesianTree;
/// use rmq_trees::trees::AsciiTree;
///
/// let tree = CartesianTree::from_slice(&[4, 2, 5]).unwrap();
/// assert_eq!(AsciiTree::new().render_to_string(&tree), " 1\n/ \\\n0 2\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AsciiTree {
    max_height: usize,
}

impl AsciiTree {
    /// Creates a renderer with the [default height limit](DEFAULT_MAX_HEIGHT).
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }

    /// Creates a renderer refusing trees with more than `max_height` levels. The bottom level of a
    /// tree of height `h` has `2^(h-1)` slots, so large limits produce very wide output.
    #[must_use]
    pub fn with_max_height(max_height: usize) -> Self {
        Self { max_height }
    }

    /// Returns the configured height limit.
    #[must_use]
    pub fn max_height(&self) -> usize {
        self.max_height
    }

    /// Writes the tree to `out`. If the tree is taller than the height limit, a one-line notice is
    /// written instead, a warning is logged, and [`RenderOutcome::TooTall`] is returned.
    ///
    /// # Errors
    /// Returns an error if writing to `out` fails.
    pub fn render<B, W>(&self, tree: &B, out: &mut W) -> Result<RenderOutcome, fmt::Error>
    where
        B: BinaryTree,
        W: Write,
    {
        let height = tree.height();
        if height > self.max_height {
            tracing::warn!(
                height,
                max_height = self.max_height,
                "tree is too tall to render"
            );
            writeln!(
                out,
                "tree height {} exceeds the printable limit of {} levels",
                height, self.max_height
            )?;
            return Ok(RenderOutcome::TooTall {
                height,
                max_height: self.max_height,
            });
        }

        let levels = labelled_levels(tree, height);
        let bottom = &levels[levels.len() - 1];
        let total_width = bottom
            .iter()
            .map(|label| label.as_ref().map_or(1, Vec::len))
            .sum::<usize>()
            + bottom.len()
            - 1;

        for (depth, level) in levels.iter().enumerate() {
            let slot_width = total_width as f64 / level.len() as f64;
            let centre = |slot: usize| {
                (((slot as f64 + 0.5) * slot_width) as usize).min(total_width - 1)
            };

            if depth > 0 {
                let mut line = vec![' '; total_width];
                for (slot, label) in level.iter().enumerate() {
                    if label.is_some() {
                        line[centre(slot)] = if slot % 2 == 0 { '/' } else { '\\' };
                    }
                }
                write_line(out, &line)?;
            }

            let mut line = vec![' '; total_width];
            for (slot, label) in level.iter().enumerate() {
                let Some(label) = label else { continue };
                let start = centre(slot) as isize - (label.len() / 2) as isize;
                for (offset, &ch) in label.iter().enumerate() {
                    let pos = start + offset as isize;
                    if pos >= 0 && (pos as usize) < total_width {
                        line[pos as usize] = ch;
                    }
                }
            }
            write_line(out, &line)?;
        }

        Ok(RenderOutcome::Rendered)
    }

    /// Renders the tree into a new string. See [`AsciiTree::render`].
    #[must_use]
    pub fn render_to_string<B: BinaryTree>(&self, tree: &B) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.render(tree, &mut out);
        out
    }
}

impl Default for AsciiTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects the labels of all `2^depth` slots of every level, `None` for slots without a node.
fn labelled_levels<B: BinaryTree>(tree: &B, height: usize) -> Vec<Vec<Option<Vec<char>>>> {
    let mut levels = Vec::with_capacity(height);
    let mut current = vec![Some(tree.root())];

    for _ in 0..height {
        let mut next = Vec::with_capacity(current.len() * 2);
        for slot in &current {
            match slot {
                Some(node) => {
                    next.push(tree.left(*node));
                    next.push(tree.right(*node));
                }
                None => next.extend([None, None]),
            }
        }
        levels.push(
            current
                .iter()
                .map(|slot| slot.map(|node| tree.label(node).chars().collect()))
                .collect(),
        );
        current = next;
    }

    levels
}

fn write_line<W: Write>(out: &mut W, line: &[char]) -> fmt::Result {
    let line: String = line.iter().collect();
    writeln!(out, "{}", line.trim_end())
}

#[cfg(test)]
mod tests;
