//! Joined parts line up: every finger lands in the slot cut for it.
//!
//! Parts are drawn in their own coordinates. The sides, the front and the
//! back share the vertical axis, measured from the bottom of the feet. The
//! front and the back are two thicknesses wider than the inner box on each
//! side, so the sides stand at 1.5t and x + 2.5t on them.

use lightboxkit_camtools::{BoxStyle, NightLightBox, NightLightBoxParameters, ToolkitSettings};
use lightboxkit_core::{Part, Point};

const EPS: f64 = 1e-6;

fn generators() -> Vec<NightLightBox> {
    let mut generators = Vec::new();
    for style in BoxStyle::ALL {
        for screw in [0.0, 3.0] {
            let params = NightLightBoxParameters {
                box_style: style,
                lock_screw_diameter: screw,
                ..Default::default()
            };
            generators.push(NightLightBox::new(params, ToolkitSettings::default()).unwrap());
        }
    }
    let thick = NightLightBoxParameters {
        background_depth: 50.0,
        lock_screw_diameter: 4.0,
        ..Default::default()
    };
    generators.push(NightLightBox::new(thick, ToolkitSettings::with_thickness(6.0)).unwrap());
    generators
}

fn name(gen: &NightLightBox) -> String {
    format!(
        "{} / screw {} / t {}",
        gen.params().box_style,
        gen.params().lock_screw_diameter,
        gen.settings().thickness
    )
}

/// Spans covered by outline segments lying on `x = at` (or `y = at`),
/// sorted. These are the tips of the fingers on that edge.
fn tips(part: &Part, vertical: bool, at: f64) -> Vec<(f64, f64)> {
    let mut spans: Vec<(f64, f64)> = part
        .outline()
        .unwrap()
        .segments()
        .into_iter()
        .filter_map(|(a, b)| {
            let (a_across, b_across, a_along, b_along) = if vertical {
                (a.x, b.x, a.y, b.y)
            } else {
                (a.y, b.y, a.x, b.x)
            };
            let on_line = (a_across - at).abs() < EPS && (b_across - at).abs() < EPS;
            (on_line && (a_along - b_along).abs() > EPS)
                .then(|| (a_along.min(b_along), a_along.max(b_along)))
        })
        .collect();
    spans.sort_by(|a, b| a.0.total_cmp(&b.0));
    spans
}

/// Spans of the rectangular holes centered on `x = at` (or `y = at`),
/// sorted.
fn slots(part: &Part, vertical: bool, at: f64) -> Vec<(f64, f64)> {
    let mut spans: Vec<(f64, f64)> = part
        .holes()
        .filter(|hole| hole.points.len() == 4)
        .map(|hole| hole.bounding_box())
        .filter_map(|bbox| {
            let (center, min, max) = if vertical {
                ((bbox.min_x + bbox.max_x) / 2.0, bbox.min_y, bbox.max_y)
            } else {
                ((bbox.min_y + bbox.max_y) / 2.0, bbox.min_x, bbox.max_x)
            };
            ((center - at).abs() < EPS).then_some((min, max))
        })
        .collect();
    spans.sort_by(|a, b| a.0.total_cmp(&b.0));
    spans
}

fn shifted(spans: &[(f64, f64)], offset: f64) -> Vec<(f64, f64)> {
    spans.iter().map(|&(a, b)| (a + offset, b + offset)).collect()
}

/// Spans seen from the other end: `s` becomes `end - s`.
fn reflected(spans: &[(f64, f64)], end: f64) -> Vec<(f64, f64)> {
    let mut spans: Vec<(f64, f64)> = spans.iter().map(|&(a, b)| (end - b, end - a)).collect();
    spans.sort_by(|a, b| a.0.total_cmp(&b.0));
    spans
}

fn assert_fits(fingers: &[(f64, f64)], slots: &[(f64, f64)], what: &str) {
    assert!(!fingers.is_empty(), "{}: no fingers", what);
    assert_eq!(fingers.len(), slots.len(), "{}: {:?} vs {:?}", what, fingers, slots);
    for (finger, slot) in fingers.iter().zip(slots) {
        assert!(
            slot.0 <= finger.0 + EPS && finger.1 <= slot.1 + EPS,
            "{}: finger {:?} outside slot {:?}",
            what,
            finger,
            slot
        );
    }
}

#[test]
fn test_side_joints_match_front_and_back_slots() {
    for gen in generators() {
        let (x, y, h) = gen.inner_dimensions();
        let t = gen.settings().thickness;
        let side = gen.side(y, h, "left").unwrap();
        let front = gen.front_back_plate(x, h, true).unwrap();
        let back = gen.front_back_plate(x, h, false).unwrap();

        let bbox = side.outline().unwrap().bounding_box();
        assert!((bbox.min_x + t).abs() < EPS);
        let front_fingers = tips(&side, true, -t);
        let back_fingers = tips(&side, true, y + t);

        for column in [1.5 * t, x + 2.5 * t] {
            let what = format!("{} front at {}", name(&gen), column);
            assert_fits(&front_fingers, &slots(&front, true, column), &what);
            let what = format!("{} back at {}", name(&gen), column);
            assert_fits(&back_fingers, &slots(&back, true, column), &what);
        }
    }
}

#[test]
fn test_screws_line_up_with_nut_slots() {
    for gen in generators() {
        let p = gen.params();
        if !p.uses_screws() {
            continue;
        }
        let (x, y, h) = gen.inner_dimensions();
        let t = gen.settings().thickness;
        let d = p.lock_screw_diameter;
        let side = gen.side(y, h, "left").unwrap();

        // end of the screw channel, one screw length into the side
        let channel = |at: f64| -> Vec<f64> {
            tips(&side, true, at)
                .into_iter()
                .filter(|(a, b)| (b - a - d).abs() < EPS)
                .map(|(a, b)| (a + b) / 2.0)
                .collect()
        };
        let front_screws = channel(p.lock_screw_length);
        let back_screws = channel(y - p.lock_screw_length);
        assert_eq!(front_screws.len(), 1, "{}", name(&gen));
        assert_eq!(back_screws.len(), 1, "{}", name(&gen));

        let round_holes = |part: &Part, column: f64| -> Vec<f64> {
            part.holes()
                .filter(|hole| hole.points.len() > 4)
                .map(|hole| hole.bounding_box())
                .filter(|bbox| ((bbox.min_x + bbox.max_x) / 2.0 - column).abs() < EPS)
                .map(|bbox| (bbox.min_y + bbox.max_y) / 2.0)
                .collect()
        };
        let front = gen.front_back_plate(x, h, true).unwrap();
        let back = gen.front_back_plate(x, h, false).unwrap();
        for column in [1.5 * t, x + 2.5 * t] {
            let front_holes = round_holes(&front, column);
            let back_holes = round_holes(&back, column);
            assert_eq!(front_holes.len(), 1, "{}", name(&gen));
            assert_eq!(back_holes.len(), 1, "{}", name(&gen));
            assert!((front_holes[0] - front_screws[0]).abs() < EPS, "{}", name(&gen));
            assert!((back_holes[0] - back_screws[0]).abs() < EPS, "{}", name(&gen));
        }
    }
}

#[test]
fn test_bottom_fingers_match_floor_slots() {
    for gen in generators() {
        let (x, y, h) = gen.inner_dimensions();
        let t = gen.settings().thickness;
        let floor = gen.settings().stackable_floor();
        let bottom = gen.bottom(x, y).unwrap();
        let side = gen.side(y, h, "right").unwrap();
        let front = gen.front_back_plate(x, h, true).unwrap();
        let back = gen.front_back_plate(x, h, false).unwrap();

        // the bottom plate lies just under the floor level
        let row = floor - 0.5 * t;

        let what = format!("{} bottom to side", name(&gen));
        assert_fits(&tips(&bottom, true, x + t), &slots(&side, false, row), &what);
        assert_fits(&tips(&bottom, true, -t), &slots(&side, false, row), &what);

        let front_fingers = shifted(&tips(&bottom, false, -t), 2.0 * t);
        let back_fingers = shifted(&tips(&bottom, false, y + t), 2.0 * t);
        let what = format!("{} bottom to front", name(&gen));
        assert_fits(&front_fingers, &slots(&front, false, row), &what);
        let what = format!("{} bottom to back", name(&gen));
        assert_fits(&back_fingers, &slots(&back, false, row), &what);
    }
}

#[test]
fn test_rails_match_bottom_and_front_slots() {
    for gen in generators() {
        let (x, y, h) = gen.inner_dimensions();
        let t = gen.settings().thickness;
        let floor = gen.settings().stackable_floor();
        let rail = gen.rail().unwrap();
        let bottom = gen.bottom(x, y).unwrap();
        let front = gen.front_back_plate(x, h, true).unwrap();

        // the rail's front fingers enter the front plate, whose inner face
        // is the front edge of the bottom
        let bbox = rail.outline().unwrap().bounding_box();
        let front_face = bbox.max_x - t;
        let down = reflected(&tips(&rail, false, -t), front_face);
        let forward = shifted(&tips(&rail, true, bbox.max_x), floor);

        for (column, front_column) in [(1.5 * t, 3.5 * t), (x - 1.5 * t, x + 0.5 * t)] {
            let what = format!("{} rail to bottom at {}", name(&gen), column);
            assert_fits(&down, &slots(&bottom, true, column), &what);
            let what = format!("{} rail to front at {}", name(&gen), front_column);
            assert_fits(&forward, &slots(&front, true, front_column), &what);
        }
    }
}

#[test]
fn test_diffuser_matches_side_slots() {
    for gen in generators() {
        let p = gen.params();
        let (_, y, h) = gen.inner_dimensions();
        let floor = gen.settings().stackable_floor();
        let diffuser = gen.diffuser_plate().unwrap();
        let side = gen.side(y, h, "left").unwrap();

        // the diffuser stands between the wood plates and the compartment
        let front_face = y - p.background_depth - p.diffuser_plate_thickness;
        let back_face = y - p.background_depth;
        let column = side
            .holes()
            .filter(|hole| hole.points.len() == 4)
            .map(|hole| hole.bounding_box())
            .filter(|bbox| bbox.height() > bbox.width() && bbox.min_y > floor)
            .map(|bbox| (bbox.min_x + bbox.max_x) / 2.0)
            .find(|c| *c > front_face && *c < back_face)
            .unwrap();

        let bbox = diffuser.outline().unwrap().bounding_box();
        let right = shifted(&tips(&diffuser, true, bbox.max_x), floor);
        let left = shifted(&tips(&diffuser, true, bbox.min_x), floor);
        let what = format!("{} diffuser", name(&gen));
        assert_fits(&right, &slots(&side, true, column), &what);
        assert_fits(&left, &slots(&side, true, column), &what);
    }
}

#[test]
fn test_compartment_top_matches_side_and_back_slots() {
    for gen in generators() {
        let p = gen.params();
        let (x, y, h) = gen.inner_dimensions();
        let t = gen.settings().thickness;
        let floor = gen.settings().stackable_floor();
        let top = gen.elec_compartment_top().unwrap();
        let side = gen.side(y, h, "left").unwrap();
        let back = gen.front_back_plate(x, h, false).unwrap();

        // slots behind the diffuser and above the floor
        let row = side
            .holes()
            .filter(|hole| hole.points.len() == 4)
            .map(|hole| hole.bounding_box())
            .filter(|bbox| bbox.min_x > y - p.background_depth - EPS)
            .map(|bbox| (bbox.min_y + bbox.max_y) / 2.0)
            .find(|c| *c > floor)
            .unwrap();

        let bbox = top.outline().unwrap().bounding_box();
        let offset = y - p.background_depth;
        let right = shifted(&tips(&top, true, bbox.max_x), offset);
        let left = shifted(&tips(&top, true, bbox.min_x), offset);
        let what = format!("{} compartment top to side", name(&gen));
        assert_fits(&right, &slots(&side, false, row), &what);
        assert_fits(&left, &slots(&side, false, row), &what);

        // same height on the back plate
        let rear = shifted(&tips(&top, false, bbox.max_y), 2.0 * t);
        let what = format!("{} compartment top to back", name(&gen));
        assert_fits(&rear, &slots(&back, false, row), &what);
    }
}

/// Even-odd test against a closed polygon.
fn contains(polygon: &[Point], p: &Point) -> bool {
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[test]
fn test_every_hole_lies_inside_its_part() {
    for mut gen in generators() {
        let what = name(&gen);
        let sheet = gen.render().unwrap().clone();
        for part in sheet.iter() {
            let outline = &part.outline().unwrap().points;
            for hole in part.holes() {
                for p in &hole.points {
                    assert!(
                        contains(outline, p),
                        "{}: hole point ({:.3}, {:.3}) outside '{}'",
                        what,
                        p.x,
                        p.y,
                        part.label
                    );
                }
            }
        }
    }
}
