//! Open path data restricted to one move followed by lines and cubics.

use kurbo::{BezPath, PathEl, Point, QuadBez};

use crate::foundation::error::{TraceError, TraceResult};
use crate::geometry::path::{CubicSegment, Section};

/// One drawing command after the initial move, in absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// `L` to the point.
    Line(Point),
    /// `C` with two control points and the end point.
    Cubic(Point, Point, Point),
}

impl DrawCommand {
    /// Where the command ends.
    pub fn end(&self) -> Point {
        match *self {
            Self::Line(p) | Self::Cubic(_, _, p) => p,
        }
    }

    /// The command as a cubic starting at `from`.
    pub fn to_segment(&self, from: Point) -> CubicSegment {
        match *self {
            Self::Line(to) => CubicSegment::line(from, to),
            Self::Cubic(c1, c2, to) => CubicSegment::new(from, c1, c2, to),
        }
    }
}

/// A single open subpath: `M` followed by at least one drawing command.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenPath {
    /// Point of the initial move.
    pub start: Point,
    /// Commands after the move, never empty.
    pub commands: Vec<DrawCommand>,
}

impl OpenPath {
    /// Parse SVG path data.
    ///
    /// Relative commands, `H`/`V` and smooth curves are normalized by the path parser, and
    /// quadratic curves are raised to cubics. A second move or a close command is rejected.
    pub fn parse(d: &str) -> TraceResult<Self> {
        let d = d.trim();
        if d.is_empty() {
            return Err(TraceError::parse("path data is empty"));
        }
        if !d.starts_with(['M', 'm']) {
            return Err(TraceError::parse("path must start with move"));
        }
        let path = BezPath::from_svg(d)
            .map_err(|e| TraceError::parse(format!("invalid path data: {e}")))?;

        let mut els = path.elements().iter();
        let start = match els.next() {
            Some(PathEl::MoveTo(p)) => *p,
            _ => return Err(TraceError::parse("path must start with move")),
        };
        let mut cursor = start;
        let mut commands = Vec::new();
        for el in els {
            let cmd = match *el {
                PathEl::LineTo(p) => DrawCommand::Line(p),
                PathEl::CurveTo(c1, c2, p) => DrawCommand::Cubic(c1, c2, p),
                PathEl::QuadTo(c, p) => {
                    let cubic = QuadBez::new(cursor, c, p).raise();
                    DrawCommand::Cubic(cubic.p1, cubic.p2, cubic.p3)
                }
                PathEl::MoveTo(_) => {
                    return Err(TraceError::parse("path cannot contain a second move"));
                }
                PathEl::ClosePath => {
                    return Err(TraceError::parse("path cannot contain a close command"));
                }
            };
            cursor = cmd.end();
            commands.push(cmd);
        }
        if commands.is_empty() {
            return Err(TraceError::parse("path too short"));
        }
        Ok(Self { start, commands })
    }

    /// Every command as a cubic, chained from the start point.
    pub fn segments(&self) -> Vec<CubicSegment> {
        let mut from = self.start;
        self.commands
            .iter()
            .map(|cmd| {
                let segment = cmd.to_segment(from);
                from = cmd.end();
                segment
            })
            .collect()
    }

    /// The path as one section.
    pub fn to_section(&self) -> TraceResult<Section> {
        Section::new(self.segments())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parse/path_data.rs"]
mod tests;
