//! Directed 2D line segments.
//!
//! A segment is a value type: two endpoints, no identity beyond its
//! coordinates. Operations that "modify" a segment return a new one.
//! Every query is total; degenerate inputs (zero length, vertical slope)
//! have deterministic fallbacks instead of error paths.
//!
//! Coordinates follow the screen convention: y grows downward, so a
//! positive angle turns clockwise and "above" means a smaller y value.

use super::{dist, intersection, Point2, Vector2};
use serde::{Deserialize, Serialize};

/// A directed line segment from `start` to `end`.
///
/// Direction matters for [`angle`](Segment::angle) and
/// [`is_above`](Segment::is_above), but not for whether two segments
/// intersect. `start == end` is legal; such a degenerate segment has
/// length 0 and every operation on it is still defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Default for Segment {
    fn default() -> Self {
        Self {
            start: Point2::origin(),
            end: Point2::origin(),
        }
    }
}

impl Segment {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Build a segment from four scalar coordinates.
    pub fn from_coords(start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Self {
        Self {
            start: Point2::new(start_x, start_y),
            end: Point2::new(end_x, end_y),
        }
    }

    /// The same segment with start and end swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Direction vector from start to end (not normalized).
    #[inline]
    pub fn delta(&self) -> Vector2 {
        self.end - self.start
    }

    /// Euclidean length. 0 for a degenerate segment.
    pub fn length(&self) -> f64 {
        dist(&self.start, &self.end)
    }

    /// True if start and end share the exact same x coordinate.
    ///
    /// Exact comparison, no tolerance: callers needing an epsilon must
    /// pre-round their coordinates.
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// True if start and end share the exact same y coordinate.
    ///
    /// Exact comparison, no tolerance.
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    /// Angle of the start→end direction, in radians clockwise from the
    /// positive x axis (y-down screen convention).
    ///
    /// A segment pointing down the screen has angle π/2. A degenerate
    /// segment reports 0.
    pub fn angle(&self) -> f64 {
        let delta = self.delta();
        delta.y.atan2(delta.x)
    }

    /// Point at arc length `distance` from start along the segment's
    /// direction.
    ///
    /// Values outside `[0, length]` extrapolate along the infinite line.
    /// A degenerate segment has no direction, so the result is `start`.
    pub fn point_at_distance(&self, distance: f64) -> Point2 {
        let length = self.length();
        if length == 0.0 {
            return self.start;
        }
        self.start + self.delta() * (distance / length)
    }

    /// Point at arc length `distance` from start, then `perpendicular`
    /// sideways from the segment's direction.
    ///
    /// A positive `perpendicular` moves to the right when looking from
    /// start towards end (clockwise perpendicular in screen coordinates).
    /// A degenerate segment returns `start`.
    pub fn point_at_distance_offset(&self, distance: f64, perpendicular: f64) -> Point2 {
        let delta = self.delta();
        let length = delta.norm();
        if length <= 0.0 {
            return self.start;
        }

        Point2::new(
            self.start.x + (delta.x * distance - delta.y * perpendicular) / length,
            self.start.y + (delta.y * distance + delta.x * perpendicular) / length,
        )
    }

    /// Point at proportional position `t` along the segment: `start` at
    /// 0, `end` at 1. No clamping; `t` outside `[0, 1]` extrapolates.
    pub fn point_at_proportion(&self, t: f64) -> Point2 {
        self.start + self.delta() * t
    }

    /// Smallest distance between this segment and `point`, plus the
    /// position on the segment where that distance is reached.
    ///
    /// When the perpendicular projection of `point` falls within the
    /// segment this is the perpendicular distance; otherwise it is the
    /// straight-line distance to the closer endpoint.
    pub fn distance_to_point(&self, point: &Point2) -> (f64, Point2) {
        let delta = self.delta();
        let length_sq = delta.norm_squared();

        if length_sq > 0.0 {
            let prop = (point - self.start).dot(&delta) / length_sq;

            if (0.0..=1.0).contains(&prop) {
                let on_segment = self.start + delta * prop;
                return (dist(point, &on_segment), on_segment);
            }
        }

        let from_start = dist(point, &self.start);
        let from_end = dist(point, &self.end);

        if from_start < from_end {
            (from_start, self.start)
        } else {
            (from_end, self.end)
        }
    }

    /// Proportional position along the segment nearest to `point`,
    /// clamped to `[0, 1]`. A degenerate segment reports 0.
    pub fn nearest_proportional_position(&self, point: &Point2) -> f64 {
        let delta = self.delta();
        let length_sq = delta.norm_squared();

        if length_sq <= 0.0 {
            return 0.0;
        }

        ((point - self.start).dot(&delta) / length_sq).clamp(0.0, 1.0)
    }

    /// Point on the segment nearest to `point`.
    pub fn nearest_point(&self, point: &Point2) -> Point2 {
        self.point_at_proportion(self.nearest_proportional_position(point))
    }

    /// True if `point` lies above the infinite line through this
    /// segment, i.e. its y coordinate is smaller than the line's y at
    /// the point's x (y-down convention).
    ///
    /// Always false for a vertical segment, which has no y-for-x.
    pub fn is_above(&self, point: &Point2) -> bool {
        self.start.x != self.end.x
            && point.y
                < (self.end.y - self.start.y) * (point.x - self.start.x)
                    / (self.end.x - self.start.x)
                    + self.start.y
    }

    /// A copy of this segment with its start moved `distance` towards
    /// the end. `distance` is capped at the segment's length, so the
    /// start can collapse onto the end but never cross past it.
    pub fn with_shortened_start(&self, distance: f64) -> Self {
        Self::new(
            self.point_at_distance(distance.min(self.length())),
            self.end,
        )
    }

    /// A copy of this segment with its end moved `distance` towards the
    /// start, capped at the segment's length.
    pub fn with_shortened_end(&self, distance: f64) -> Self {
        let length = self.length();
        Self::new(
            self.start,
            self.point_at_distance(length - distance.min(length)),
        )
    }

    /// Intersection of this segment with another.
    ///
    /// The returned point is always meaningful: where the segments meet,
    /// or where their infinite extensions would meet, or a deterministic
    /// fallback (see [`intersection::segment_intersection`]). The boolean
    /// is true only when the segments themselves actually cross.
    pub fn intersection(&self, other: &Segment) -> (Point2, bool) {
        intersection::segment_intersection(self.start, self.end, other.start, other.end)
    }

    /// True if the two segments (not just their infinite lines) meet.
    pub fn intersects(&self, other: &Segment) -> bool {
        self.intersection(other).1
    }

    /// Where this segment's infinite line meets the other's, ignoring
    /// whether the crossing lies within either segment.
    pub fn intersection_point(&self, other: &Segment) -> Point2 {
        self.intersection(other).0
    }
}
