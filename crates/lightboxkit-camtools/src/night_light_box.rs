//! Night Light Box
//!
//! A decorative lamp: a stack of laser cut wood plates in front of an
//! acrylic diffuser, lit from a closed compartment at the back. The box is
//! held together by finger joints and optionally by screws with captured
//! nuts; the lid turns on a hinge at the back.

mod extra_holes;
mod types;

pub use extra_holes::ExtraHole;
pub use types::{BoxStyle, NightLightBoxParameters, DEFAULT_BACK_EXTRA_HOLES};

use crate::error::{CamToolResult, ParameterError};
use crate::toolkit::{
    rectangular_wall, EdgeKind, LayoutCursor, PartBuilder, Placement, Step, ToolkitSettings,
};
use lightboxkit_core::{Part, Result, Sheet};
use tracing::{debug, info};

/// Label engraved on every decorative plate.
pub const WOOD_PLATE_LABEL: &str = "Insert cut and\nengraved art here";

pub const ASSEMBLY_STEPS: [&str; 10] = [
    "Insert the rails in the bottom plate",
    "Insert the diffuser plate",
    "Insert one side",
    "Insert the electronics compartment top in the side",
    "Add (and glue if needed) the hinge rings to the lid top and insert it in the side",
    "Add the other side",
    "Insert the front plate",
    "Mount the electronics in the electronics compartment and/or on the back plate",
    "Insert the back plate",
    "Add the nuts and screws to hold everything together if needed",
];

pub struct NightLightBox {
    params: NightLightBoxParameters,
    settings: ToolkitSettings,
    extra_holes: Vec<ExtraHole>,
    sheet: Sheet,
}

impl NightLightBox {
    pub fn new(params: NightLightBoxParameters, settings: ToolkitSettings) -> CamToolResult<Self> {
        settings.validate()?;
        params.validate(settings.thickness)?;
        let extra_holes = params.extra_holes()?;

        let builder = PartBuilder::new(&settings);
        if builder.hinge_knuckle_length() > 5.0 * settings.thickness {
            return Err(ParameterError::Incompatible(format!(
                "hinge knuckle ({:.2} mm) does not fit the {:.2} mm hinge edge of the sides",
                builder.hinge_knuckle_length(),
                5.0 * settings.thickness
            ))
            .into());
        }

        let x = params.inner_width(settings.thickness);
        let y = params.inner_depth();
        let feet = 2.0 * settings.foot_width() + 4.0 * settings.foot_arc_length();
        if x.min(y) < feet {
            return Err(ParameterError::Incompatible(format!(
                "stackable feet ({:.2} mm) are longer than the {:.2} mm bottom edge",
                feet,
                x.min(y)
            ))
            .into());
        }

        Ok(Self {
            params,
            settings,
            extra_holes,
            sheet: Sheet::new(),
        })
    }

    pub fn params(&self) -> &NightLightBoxParameters {
        &self.params
    }

    pub fn settings(&self) -> &ToolkitSettings {
        &self.settings
    }

    /// Parts placed by the last [`render`](Self::render).
    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    fn t(&self) -> f64 {
        self.settings.thickness
    }

    /// Pick a factor depending on the box style.
    fn pick(&self, minimalist: f64, other: f64) -> f64 {
        if self.params.box_style.is_minimalist() {
            minimalist
        } else {
            other
        }
    }

    /// Inner width, depth and height of the box.
    pub fn inner_dimensions(&self) -> (f64, f64, f64) {
        let t = self.t();
        (
            self.params.inner_width(t),
            self.params.inner_depth(),
            self.params.inner_height(t),
        )
    }

    /// Summary of the box for file headers.
    pub fn description(&self) -> Vec<String> {
        let p = &self.params;
        let (x, y, h) = self.inner_dimensions();
        let mut lines = vec![
            format!("Box style: {}", p.box_style),
            format!("Inner dimensions: {:.2}x{:.2}x{:.2} mm", x, y, h),
            format!(
                "Visible plate zone: {}x{} mm, corner {} mm",
                p.plate_visible_width, p.plate_visible_height, p.window_corner
            ),
            format!(
                "Wood plates: {} x {} mm, spacing {} mm, hooks {}",
                p.wood_plates_count, p.wood_plate_thickness, p.inter_plate_spacing, p.hooks
            ),
            format!("Diffuser thickness: {} mm", p.diffuser_plate_thickness),
            format!("Background depth: {} mm", p.background_depth),
            format!("Margin: {} mm", p.margin),
            format!("Material thickness: {} mm", self.settings.thickness),
            format!("Burn: {} mm", self.settings.burn),
        ];
        if p.uses_screws() {
            lines.push(format!(
                "Lock screws: M{} x {} mm, nut {} x {} mm",
                p.lock_screw_diameter, p.lock_screw_length, p.lock_nut_width, p.lock_nut_thickness
            ));
        }
        lines
    }

    /// Top of the floor above the bottom of the feet. Every part standing
    /// on the floor is measured from here.
    fn floor_level(&self) -> f64 {
        self.settings.stackable_floor()
    }

    /// Height above the floor where the finger joints of the diffuser
    /// start.
    fn diffuser_joint_start(&self) -> f64 {
        let p = &self.params;
        p.plate_visible_height + self.pick(0.0, 4.0) * self.t() - p.margin
    }

    /// Height above the floor of the middle of the electronics compartment
    /// top.
    fn compartment_top_level(&self) -> f64 {
        let p = &self.params;
        p.plate_visible_height + p.margin + self.pick(1.5, 5.5) * self.t()
    }

    /// Offset of the customizable face on the front plate.
    fn face_offset(&self) -> (f64, f64) {
        (self.t(), self.floor_level() - self.t())
    }

    /// Peg holes of the customizable face, in face coordinates.
    fn peg_holes(&self, x: f64, h: f64) -> [(f64, f64); 3] {
        let t = self.t();
        [
            (4.5 * t, 2.5 * t),
            (x - 2.5 * t, 2.5 * t),
            ((x + 2.0 * t) / 2.0, h - 0.5 * t),
        ]
    }

    fn rail_length(&self) -> f64 {
        let p = &self.params;
        2.0 * self.t()
            + p.diffuser_plate_thickness
            + (p.inter_plate_spacing + p.wood_plate_thickness) * p.wood_plates_count as f64
    }

    /// T-slot for a screw and its nut, cut into the current edge. Advances
    /// the pen by the screw diameter.
    pub fn screw_attachment(&self, b: &mut PartBuilder<'_>) {
        let p = &self.params;
        let t = self.t();
        let d = p.lock_screw_diameter;
        let shoulder = p.lock_nut_width / 2.0 - d / 2.0;
        let shaft = p.lock_screw_length - p.lock_nut_thickness - t;

        b.polyline(&[
            Step::Turn(90.0),
            Step::Line(t),
            Step::Turn(90.0),
            Step::Line(shoulder),
            Step::Turn(-90.0),
            Step::Line(p.lock_nut_thickness),
            Step::Turn(-90.0),
            Step::Line(shoulder),
            Step::Turn(90.0),
            Step::Line(shaft),
            Step::Turn(-90.0),
            Step::Line(d),
            Step::Turn(-90.0),
            Step::Line(shaft),
            Step::Turn(90.0),
            Step::Line(shoulder),
            Step::Turn(-90.0),
            Step::Line(p.lock_nut_thickness),
            Step::Turn(-90.0),
            Step::Line(shoulder),
            Step::Turn(90.0),
            Step::Line(t),
            Step::Turn(90.0),
        ]);
    }

    /// Finger holes in the floor for the two rails.
    pub fn rail_slots(&self, b: &mut PartBuilder<'_>, x: f64, _y: f64) -> Result<()> {
        let t = self.t();
        let from_front = self.params.inter_plate_spacing - t - self.params.margin / 2.0;
        let length = self.rail_length();
        b.finger_holes_at(1.5 * t, from_front, length, 90.0)?;
        b.finger_holes_at(x - 1.5 * t, from_front, length, 90.0)
    }

    /// Bottom of the wood plates and the diffuser: notches on both ends
    /// sliding over the rails. Ends turned up for the right side.
    fn plate_bottom(&self, b: &mut PartBuilder<'_>, inner: f64) {
        let t = self.t();
        let m = self.params.margin;
        b.polyline(&[
            Step::Line(t - m),
            Step::Turn(90.0),
            Step::Line(t + m),
            Step::Turn(-90.0),
            Step::Line(t + m),
            Step::Turn(-90.0),
            Step::Line(t + m),
            Step::Turn(90.0),
            Step::Line(inner),
            Step::Turn(90.0),
            Step::Line(t + m),
            Step::Turn(-90.0),
            Step::Line(t + m),
            Step::Turn(-90.0),
            Step::Line(t + m),
            Step::Turn(90.0),
            Step::Line(t - m),
            Step::Turn(90.0),
        ]);
    }

    pub fn wood_plate(&self) -> CamToolResult<Part> {
        let p = &self.params;
        let t = self.t();
        let m = p.margin;
        let mut b = PartBuilder::new(&self.settings);

        // visible zone
        b.annotation_rectangle(
            self.pick(3.0, 5.0) * t,
            self.pick(2.0, 4.0) * t,
            p.plate_visible_width,
            p.plate_visible_height,
            0.0,
            false,
            false,
        )?;

        b.move_to(t + m / 2.0, 0.0, 0.0);
        self.plate_bottom(&mut b, p.plate_visible_width + self.pick(0.0, 4.0) * t - m);

        let rise = p.plate_visible_height + self.pick(2.0, 6.0) * t + m;
        b.polyline(&[Step::Line(rise), Step::Turn(-90.0), Step::Line(t + m / 2.0)]);

        // right ear
        if p.hooks {
            b.polyline(&[
                Step::Turn(-90.0),
                Step::Line(t),
                Step::Turn(90.0),
                Step::Bend(90.0, t),
                Step::Line(t),
                Step::Bend(90.0, t),
            ]);
        } else {
            b.polyline(&[Step::Turn(90.0), Step::Line(2.0 * t - 2.0 * m), Step::Turn(90.0)]);
        }

        b.edge(p.plate_visible_width + self.pick(6.0, 10.0) * t);

        // left ear
        if p.hooks {
            b.polyline(&[
                Step::Bend(90.0, t),
                Step::Line(t),
                Step::Bend(90.0, t),
                Step::Turn(90.0),
                Step::Line(t),
                Step::Turn(-90.0),
            ]);
        } else {
            b.polyline(&[Step::Turn(90.0), Step::Line(2.0 * t - 2.0 * m), Step::Turn(90.0)]);
        }

        b.polyline(&[
            Step::Line(t + m / 2.0),
            Step::Turn(-90.0),
            Step::Line(rise),
            Step::Turn(90.0),
        ]);

        Ok(b.finish(WOOD_PLATE_LABEL)?)
    }

    pub fn diffuser_plate(&self) -> CamToolResult<Part> {
        let p = &self.params;
        let t = self.t();
        let m = p.margin;
        let mut b = PartBuilder::new(&self.settings);

        self.plate_bottom(&mut b, p.plate_visible_width + self.pick(0.0, 4.0) * t - m);

        let side = self.diffuser_joint_start();
        b.edge(side).finger_edge(4.0 * t, true).corner(90.0);
        b.edge(p.plate_visible_width + self.pick(4.0, 8.0) * t - m)
            .corner(90.0);
        b.finger_edge(4.0 * t, true).edge(side).corner(90.0);

        Ok(b.finish("Diffuser")?)
    }

    pub fn elec_compartment_top(&self) -> CamToolResult<Part> {
        let p = &self.params;
        let t = self.t();
        let width = self.pick(4.0, 8.0) * t + p.plate_visible_width + p.margin;
        let mut b = PartBuilder::new(&self.settings);

        b.edge(width).corner(90.0);
        b.finger_edge(p.background_depth, true).corner(90.0);
        b.finger_edge(width, true).corner(90.0);
        b.finger_edge(p.background_depth, true).corner(90.0);

        Ok(b.finish("elec. comp.")?)
    }

    /// Finger edge holding the front or back plate, split around a screw
    /// when screws are used.
    fn side_joint(&self, b: &mut PartBuilder<'_>, length: f64) {
        if self.params.uses_screws() {
            let part = length / 2.0 - self.params.lock_screw_diameter / 2.0;
            b.finger_edge(part, true);
            self.screw_attachment(b);
            b.finger_edge(part, true);
        } else {
            b.finger_edge(length, true);
        }
    }

    pub fn side(&self, y: f64, h: f64, label: &str) -> CamToolResult<Part> {
        let p = &self.params;
        let t = self.t();
        let m = p.margin;
        let mut b = PartBuilder::new(&self.settings);

        let bottom = EdgeKind::Stackable;
        let floor = bottom.end_width(&b);

        // diffuser and electronics compartment top
        b.finger_holes_at(
            y - p.background_depth - p.diffuser_plate_thickness / 2.0 - m / 2.0,
            floor + self.diffuser_joint_start(),
            4.0 * t,
            90.0,
        )?;
        b.finger_holes_at(
            y - p.background_depth,
            floor + self.compartment_top_level(),
            p.background_depth,
            0.0,
        )?;

        bottom.draw(&mut b, y)?;
        b.corner(90.0);

        // back
        b.edge(floor);
        self.side_joint(&mut b, h - 3.0 * t);
        b.edge(3.0 * t).corner(90.0);

        // top
        b.hinge_knuckle_edge(5.0 * t)?;
        b.edge(
            p.background_depth - 5.0 * t + p.diffuser_plate_thickness + p.inter_plate_spacing,
        )
        .corner(90.0);
        for _ in 0..p.wood_plates_count {
            b.polyline(&[
                Step::Line(2.0 * t + m),
                Step::Turn(-90.0),
                Step::Line(p.wood_plate_thickness + m),
                Step::Turn(-90.0),
                Step::Line(2.0 * t + m),
                Step::Turn(90.0),
                Step::Line(p.inter_plate_spacing - m),
                Step::Turn(90.0),
            ]);
        }

        // front
        self.side_joint(&mut b, h);
        b.edge(floor).corner(90.0);

        Ok(b.finish(label)?)
    }

    pub fn rail(&self) -> CamToolResult<Part> {
        let p = &self.params;
        let t = self.t();
        let m = p.margin;
        let mut b = PartBuilder::new(&self.settings);

        b.finger_edge(self.rail_length(), true);
        b.edge(p.inter_plate_spacing - t - m / 2.0).corner(90.0);
        b.finger_edge(2.0 * t, true).corner(90.0);

        b.edge(p.inter_plate_spacing - m).corner(90.0);
        for _ in 0..p.wood_plates_count {
            b.polyline(&[
                Step::Line(t + m),
                Step::Turn(-90.0),
                Step::Line(p.wood_plate_thickness + m),
                Step::Turn(-90.0),
                Step::Line(t + m),
                Step::Turn(90.0),
                Step::Line(p.inter_plate_spacing - m),
                Step::Turn(90.0),
            ]);
        }
        b.polyline(&[
            Step::Line(t + m),
            Step::Turn(-90.0),
            Step::Line(p.diffuser_plate_thickness + m),
            Step::Turn(-90.0),
            Step::Line(t + m),
            Step::Turn(90.0),
            Step::Line(t - m / 2.0),
            Step::Turn(90.0),
        ]);

        b.edge(2.0 * t).corner(90.0);

        Ok(b.finish("rail")?)
    }

    /// Slots for the finger joints of both sides, starting `start` above
    /// the bottom and `length` long. With screws the slots are split
    /// around the screw hole the way [`side_joint`](Self::side_joint)
    /// splits the fingers.
    fn side_joint_holes(&self, b: &mut PartBuilder<'_>, start: f64, length: f64) -> Result<()> {
        let t = self.t();
        let (x, _, _) = self.inner_dimensions();
        let d = self.params.lock_screw_diameter;

        for column in [1.5 * t, x + 2.5 * t] {
            if self.params.uses_screws() {
                let part = length / 2.0 - d / 2.0;
                let screw = start + length / 2.0;
                b.finger_holes_at(column, start, part, 90.0)?;
                b.finger_holes_at(column, screw + d / 2.0, part, 90.0)?;
                b.hole(column, screw, d / 2.0)?;
            } else {
                b.finger_holes_at(column, start, length, 90.0)?;
            }
        }
        Ok(())
    }

    /// Floor and rail slots shared by the front and the back.
    fn floor_holes(&self, b: &mut PartBuilder<'_>, with_rails: bool) -> Result<()> {
        let t = self.t();
        let (x, _, _) = self.inner_dimensions();
        let floor = self.floor_level();

        b.finger_holes_at(2.0 * t, floor - 0.5 * t, x, 0.0)?;
        if with_rails {
            b.finger_holes_at(3.5 * t, floor, 2.0 * t, 90.0)?;
            b.finger_holes_at(x + 0.5 * t, floor, 2.0 * t, 90.0)?;
        }
        Ok(())
    }

    pub fn front_extra_holes(&self, b: &mut PartBuilder<'_>) -> Result<()> {
        let p = &self.params;
        let t = self.t();
        let (x, _, h) = self.inner_dimensions();
        let floor = self.floor_level();

        // window
        b.rectangular_hole(
            x / 2.0 + 2.0 * t,
            floor + p.plate_visible_height / 2.0 + self.pick(2.0, 4.0) * t,
            p.plate_visible_width,
            p.plate_visible_height,
            p.window_corner,
            true,
            true,
        )?;

        self.floor_holes(b, true)?;
        self.side_joint_holes(b, floor, h)?;

        // pegs of the customizable face
        if p.box_style == BoxStyle::ExtraCustomizableFace {
            let (dx, dy) = self.face_offset();
            for (px, py) in self.peg_holes(x, h) {
                b.rectangular_hole(px + dx, py + dy, t, t, 0.0, true, true)?;
            }
        }

        Ok(())
    }

    pub fn back_extra_holes(&self, b: &mut PartBuilder<'_>) -> Result<()> {
        let t = self.t();
        let (inner_x, _, h) = self.inner_dimensions();
        let floor = self.floor_level();

        self.floor_holes(b, false)?;
        self.side_joint_holes(b, floor, h - 3.0 * t)?;

        // electronics compartment top
        b.finger_holes_at(2.0 * t, floor + self.compartment_top_level(), inner_x, 0.0)?;

        // connectors, relative to the inner bottom left corner
        for hole in &self.extra_holes {
            match *hole {
                ExtraHole::Rectangle {
                    x,
                    y,
                    width,
                    height,
                } => {
                    b.rectangular_hole(x + 2.0 * t, y + floor, width, height, 0.0, true, true)?;
                }
                ExtraHole::Circle { x, y, diameter } => {
                    b.hole(x + 2.0 * t, y + floor, diameter / 2.0)?;
                }
            }
        }

        Ok(())
    }

    pub fn front_back_plate(&self, x: f64, h: f64, is_front: bool) -> CamToolResult<Part> {
        let t = self.t();
        let mut b = PartBuilder::new(&self.settings);

        if is_front {
            self.front_extra_holes(&mut b)?;
        } else {
            self.back_extra_holes(&mut b)?;
        }

        // the front reaches the top of the sides, the back stops one
        // thickness lower under the lid
        let side = self.floor_level() + h - if is_front { t } else { 2.0 * t };
        b.edge(2.0 * t);
        EdgeKind::StackableFeet.draw(&mut b, x)?;
        b.polyline(&[
            Step::Line(2.0 * t),
            Step::Turn(90.0),
            Step::Line(side),
            Step::Bend(90.0, t),
            Step::Line(x + 2.0 * t),
            Step::Bend(90.0, t),
            Step::Line(side),
            Step::Turn(90.0),
        ]);

        Ok(b.finish(if is_front { "front" } else { "back" })?)
    }

    /// Separate face plate with its own window, held on the front by three
    /// pegs.
    pub fn customizable_face(&self, x: f64, h: f64) -> CamToolResult<Part> {
        let p = &self.params;
        let t = self.t();
        let pegs = self.peg_holes(x, h);
        let mut b = PartBuilder::new(&self.settings);

        rectangular_wall(&mut b, x + 2.0 * t, h, "EEEE", |b, i| {
            if i == 0 {
                b.rectangular_hole(
                    x / 2.0 + t,
                    p.plate_visible_height / 2.0 + 5.0 * t,
                    p.plate_visible_width,
                    p.plate_visible_height,
                    p.window_corner,
                    true,
                    true,
                )?;
                for (px, py) in pegs {
                    b.rectangular_hole(px, py, t, t, 0.0, true, true)?;
                }
            }
            Ok(())
        })?;

        Ok(b.finish("customizable face")?)
    }

    pub fn peg(&self) -> CamToolResult<Part> {
        let t = self.t();
        let mut b = PartBuilder::new(&self.settings);
        rectangular_wall(&mut b, 2.0 * t, t, "eeee", |_, _| Ok(()))?;
        Ok(b.finish("peg")?)
    }

    pub fn bottom(&self, x: f64, y: f64) -> CamToolResult<Part> {
        let mut b = PartBuilder::new(&self.settings);
        rectangular_wall(&mut b, x, y, "ffff", |b, i| {
            if i == 0 {
                self.rail_slots(b, x, y)?;
            }
            Ok(())
        })?;
        Ok(b.finish("bottom")?)
    }

    /// Lid turning on pins that sit in the knuckles of the sides.
    pub fn lid(&self, x: f64, y: f64) -> CamToolResult<Part> {
        let mut b = PartBuilder::new(&self.settings);
        rectangular_wall(&mut b, y - self.t(), x, "JeIE", |_, _| Ok(()))?;
        Ok(b.finish("lid top")?)
    }

    /// Draw every part and lay them out on the sheet.
    pub fn render(&mut self) -> CamToolResult<&Sheet> {
        let (x, y, h) = self.inner_dimensions();
        info!(
            "Rendering night light box ({}): inner {:.2} x {:.2} x {:.2} mm, {} wood plates",
            self.params.box_style, x, y, h, self.params.wood_plates_count
        );

        let up = Placement::UP;
        let mut parts: Vec<(Part, Placement)> = vec![
            (self.side(y, h, "left")?, "mirror".parse()?),
            (self.side(y, h, "right")?, "left up".parse()?),
            (self.rail()?, up),
            (self.rail()?, "up mirror".parse()?),
            (self.bottom(x, y)?, up),
            (self.front_back_plate(x, h, false)?, up),
            (self.front_back_plate(x, h, true)?, up),
        ];

        if self.params.box_style == BoxStyle::ExtraCustomizableFace {
            parts.push((self.customizable_face(x, h)?, up));
            for _ in 0..3 {
                parts.push((self.peg()?, up));
            }
        }

        parts.push((self.elec_compartment_top()?, up));
        parts.push((self.lid(x, y)?, up));
        parts.push((self.diffuser_plate()?, up));
        for _ in 0..self.params.wood_plates_count {
            parts.push((self.wood_plate()?, up));
        }

        let mut sheet = Sheet::new();
        let mut cursor = LayoutCursor::new(self.settings.spacing);
        for (part, placement) in parts {
            part.validate()?;
            let bbox = part.bounding_box();
            debug!(
                "Part '{}': {:.2} x {:.2} mm, {} holes",
                part.label.replace('\n', " "),
                bbox.width(),
                bbox.height(),
                part.holes().count()
            );
            cursor.place(&mut sheet, part, placement);
        }

        info!("Rendered {} parts", sheet.len());
        self.sheet = sheet;
        Ok(&self.sheet)
    }
}
