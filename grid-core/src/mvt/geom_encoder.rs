//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Encode geometries according to MVT spec
//! https://github.com/mapbox/vector-tile-spec/tree/master/2.1

use crate::core::screen;

#[derive(Clone, Copy)]
enum Command {
    MoveTo = 1,
    LineTo = 2,
    ClosePath = 7,
}

/// Command id in the lower 3 bits, repeat count in the remaining bits
/// https://github.com/mapbox/vector-tile-spec/tree/master/2.1#431-command-integers
fn command_integer(cmd: Command, count: usize) -> u32 {
    (cmd as u32 & 0x7) | ((count as u32) << 3)
}

/// Zigzag encoded coordinate delta
/// https://github.com/mapbox/vector-tile-spec/tree/master/2.1#432-parameter-integers
fn parameter_integer(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

/// Geometry commands with the cursor position after the last command
pub struct CommandSequence {
    commands: Vec<u32>,
    cursor: screen::Point,
}

impl CommandSequence {
    pub fn new() -> CommandSequence {
        CommandSequence {
            commands: Vec::new(),
            cursor: screen::Point::origin(),
        }
    }
    pub fn as_slice(&self) -> &[u32] {
        &self.commands
    }
    pub fn into_vec(self) -> Vec<u32> {
        self.commands
    }
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
    fn command(&mut self, cmd: Command, count: usize) {
        self.commands.push(command_integer(cmd, count));
    }
    fn move_cursor(&mut self, point: &screen::Point) {
        self.commands
            .push(parameter_integer(point.x.saturating_sub(self.cursor.x)));
        self.commands
            .push(parameter_integer(point.y.saturating_sub(self.cursor.y)));
        self.cursor = *point;
    }
}

pub trait EncodableGeom {
    fn encode(&self) -> CommandSequence {
        let mut seq = CommandSequence::new();
        self.encode_to(&mut seq);
        seq
    }
    /// Append commands, continuing at the cursor of `seq`
    fn encode_to(&self, seq: &mut CommandSequence);
}

impl EncodableGeom for screen::Point {
    fn encode_to(&self, seq: &mut CommandSequence) {
        seq.command(Command::MoveTo, 1);
        seq.move_cursor(self);
    }
}

/// Closed ring, with ClosePath replacing the repeated first point.
/// Rings with less than three distinct points are skipped.
impl EncodableGeom for screen::LineString {
    fn encode_to(&self, seq: &mut CommandSequence) {
        let n = self.points.len();
        if n <= 3 {
            return;
        }
        self.points[0].encode_to(seq);
        seq.command(Command::LineTo, n - 2);
        for point in &self.points[1..n - 1] {
            seq.move_cursor(point);
        }
        seq.command(Command::ClosePath, 1);
    }
}

impl EncodableGeom for screen::Polygon {
    fn encode_to(&self, seq: &mut CommandSequence) {
        for ring in &self.rings {
            ring.encode_to(seq);
        }
    }
}
