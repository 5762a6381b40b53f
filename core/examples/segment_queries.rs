use geom_core::geometry::{Point2, Segment};

fn main() {
    let base = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
    let crossing = Segment::from_coords(5.0, -5.0, 5.0, 5.0);
    let parallel = Segment::from_coords(0.0, 5.0, 10.0, 5.0);

    println!("base: {:?}", base);
    println!("length: {}", base.length());
    println!("angle: {} rad", base.angle());

    let (point, hit) = base.intersection(&crossing);
    println!("vs crossing: hit={} at {:?}", hit, point);

    let (point, hit) = base.intersection(&parallel);
    println!("vs parallel: hit={} fallback={:?}", hit, point);

    let cursor = Point2::new(7.0, 3.0);
    let (distance, nearest) = base.distance_to_point(&cursor);
    println!(
        "cursor {:?}: distance {} to nearest {:?} (t={})",
        cursor,
        distance,
        nearest,
        base.nearest_proportional_position(&cursor)
    );

    let trimmed = base.with_shortened_start(2.0).with_shortened_end(2.0);
    println!("trimmed for arrowheads: {:?}", trimmed);
}
