use super::*;
use crate::rmq::{CartesianTree, SegmentTreeRmq};

#[test]
fn test_cartesian_tree() {
    let tree = CartesianTree::from_slice(&[4, 2, 5]).unwrap();
    let rendered = AsciiTree::new().render_to_string(&tree);
    assert_eq!(rendered, " 1\n/ \\\n0 2\n");
}

#[test]
fn test_missing_left_child() {
    let tree = CartesianTree::from_slice(&[1, 2]).unwrap();
    let rendered = AsciiTree::new().render_to_string(&tree);
    assert_eq!(rendered, " 0\n  \\\n  1\n");
}

#[test]
fn test_segment_tree() {
    let tree = SegmentTreeRmq::new(vec![3, 1]).unwrap();
    let rendered = AsciiTree::new().render_to_string(&tree);
    assert_eq!(rendered, "   [0:1]\n  /     \\\n[0:0] [1:1]\n");
}

#[test]
fn test_single_node() {
    let tree = SegmentTreeRmq::new(vec![3]).unwrap();
    assert_eq!(AsciiTree::new().render_to_string(&tree), "[0:0]\n");
}

#[test]
fn test_reference_example_shape() {
    let tree = CartesianTree::from_slice(&[4, 2, 5, 1, 8, 0, 3, 1, 9]).unwrap();
    let rendered = AsciiTree::new().render_to_string(&tree);
    let lines: Vec<&str> = rendered.lines().collect();

    // four node lines and three branch lines
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0].trim(), "5");
    let mut digits: Vec<char> = lines
        .iter()
        .step_by(2)
        .flat_map(|line| line.chars())
        .filter(char::is_ascii_digit)
        .collect();
    digits.sort_unstable();
    assert_eq!(digits, vec!['0', '1', '2', '3', '4', '5', '6', '7', '8']);
}

#[test]
fn test_too_tall() {
    let tree = CartesianTree::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    let mut out = String::new();
    let outcome = AsciiTree::new().render(&tree, &mut out).unwrap();

    assert_eq!(
        outcome,
        RenderOutcome::TooTall {
            height: 9,
            max_height: DEFAULT_MAX_HEIGHT
        }
    );
    assert_eq!(out, "tree height 9 exceeds the printable limit of 8 levels\n");

    let outcome = AsciiTree::with_max_height(9).render(&tree, &mut String::new());
    assert_eq!(outcome, Ok(RenderOutcome::Rendered));
}

#[test]
fn test_custom_limit() {
    let tree = CartesianTree::from_slice(&[4, 2, 5]).unwrap();
    let renderer = AsciiTree::with_max_height(1);
    assert_eq!(renderer.max_height(), 1);
    assert_eq!(
        renderer.render(&tree, &mut String::new()),
        Ok(RenderOutcome::TooTall {
            height: 2,
            max_height: 1
        })
    );
    assert_eq!(AsciiTree::default(), AsciiTree::new());
}

#[test]
fn test_default_height() {
    let tree = CartesianTree::from_slice(&[4, 2, 5, 1, 8, 0, 3, 1, 9]).unwrap();
    assert_eq!(BinaryTree::height(&tree), 4);

    let seg = SegmentTreeRmq::new(vec![4, 2, 5, 1, 8, 0, 3, 1, 9]).unwrap();
    // the default traversal agrees with the height recorded during construction
    let mut stack = vec![(BinaryTree::root(&seg), 1)];
    let mut height = 0;
    while let Some((node, depth)) = stack.pop() {
        height = usize::max(height, depth);
        stack.extend(seg.left(node).map(|c| (c, depth + 1)));
        stack.extend(seg.right(node).map(|c| (c, depth + 1)));
    }
    assert_eq!(BinaryTree::height(&seg), height);
}
