use rmq_trees::trees::AsciiTree;
use rmq_trees::{LcaRmq, RangeMinimum, SegmentTreeRmq};
use tracing_subscriber::EnvFilter;

fn main() -> rmq_trees::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data = vec![4, 2, 5, 1, 8, 0, 3, 1, 9];
    let (l, r) = (3, 5);
    let renderer = AsciiTree::new();

    let lca = LcaRmq::from_slice(&data)?;
    println!("Cartesian tree:");
    print!("{}", renderer.render_to_string(lca.cartesian_tree()));
    let (index, value) = lca.range_min(l, r)?;
    println!("RMQ({l},{r}) = arr[{index}] = {value}");

    let seg = SegmentTreeRmq::new(data)?;
    println!("Segment tree:");
    print!("{}", renderer.render_to_string(&seg));
    let (index, value) = seg.range_min(l, r)?;
    println!("RMQ({l},{r}) = arr[{index}] = {value}");

    Ok(())
}
