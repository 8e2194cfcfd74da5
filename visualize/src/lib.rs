// MIT LICENSE
//
// Copyright (c) 2021 Dash Core Group
//
// Permission is hereby granted, free of charge, to any
// person obtaining a copy of this software and associated
// documentation files (the "Software"), to deal in the
// Software without restriction, including without
// limitation the rights to use, copy, modify, merge,
// publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software
// is furnished to do so, subject to the following
// conditions:
//
// The above copyright notice and this permission notice
// shall be included in all copies or substantial portions
// of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF
// ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED
// TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A
// PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT
// SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY
// CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR
// IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
// DEALINGS IN THE SOFTWARE.

//! Visualize
//!
//! Draws trees one entry per line, with box-drawing connectors:
//!
//! ```text
//! ┐node [hex: 0a1b2c3d..4e5f6a7b]
//! ├─╴leaf [hex: ...]
//! └─┐node [hex: ...]
//!   ├─╴leaf [hex: ...]
//!   └─╴leaf [hex: ...]
//! ```

#![warn(missing_docs)]

use std::io::{Result, Write};

use itertools::{Itertools, Position};

static HEX_LEN: usize = 8;

const BRANCH: &str = "├─";
const LAST_BRANCH: &str = "└─";
const GUIDE: &str = "│ ";
const BLANK: &str = "  ";

/// Pretty visualization of tree components.
pub trait Visualize {
    /// Draw `self` through `drawer` and hand the drawer back.
    fn visualize<W: Write>(&self, drawer: Drawer<W>) -> Result<Drawer<W>>;
}

/// A `io::Write` proxy that prepends branch connectors to draw trees.
///
/// `guides` holds one flag per open level: whether the entry at that level is
/// the last among its siblings.
pub struct Drawer<W: Write> {
    guides: Vec<bool>,
    write: W,
}

impl<W: Write> Drawer<W> {
    /// Start drawing at the root level.
    pub fn new(write: W) -> Self {
        Drawer {
            guides: Vec::new(),
            write,
        }
    }

    /// Open a child level. `last` tells whether the child about to be drawn
    /// is the last of its siblings.
    pub fn down(&mut self, last: bool) {
        self.guides.push(last);
    }

    /// Close the innermost child level.
    pub fn up(&mut self) {
        self.guides.pop();
    }

    /// Write the connectors for a new entry at the current level.
    pub fn begin_entry(&mut self) -> Result<()> {
        if let Some((last, ancestors)) = self.guides.split_last() {
            for ancestor_last in ancestors {
                let guide = if *ancestor_last { BLANK } else { GUIDE };
                self.write.write_all(guide.as_bytes())?;
            }
            let branch = if *last { LAST_BRANCH } else { BRANCH };
            self.write.write_all(branch.as_bytes())?;
        }
        Ok(())
    }

    /// Write raw bytes to the current entry.
    pub fn write(&mut self, buf: &[u8]) -> Result<()> {
        self.write.write_all(buf)
    }

    /// Terminate the current entry's line.
    pub fn end_entry(&mut self) -> Result<()> {
        self.write.write_all(b"\n")
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.write.flush()
    }
}

/// Draw `children` one level below the current entry.
pub fn visualize_children<W: Write, T: Visualize>(
    mut drawer: Drawer<W>,
    children: &[T],
) -> Result<Drawer<W>> {
    for (position, child) in children.iter().with_position() {
        drawer.down(matches!(position, Position::Last | Position::Only));
        drawer = child.visualize(drawer)?;
        drawer.up();
    }
    Ok(drawer)
}

/// Hex encoding, abbreviated to the first and last 8 digits for long inputs.
pub fn to_hex(bytes: &[u8]) -> String {
    let encoded = hex::encode(bytes);
    let remaining = encoded.len().saturating_sub(HEX_LEN);
    if remaining >= 8 {
        format!("{}..{}", &encoded[0..HEX_LEN], &encoded[remaining..])
    } else {
        encoded
    }
}

impl Visualize for [u8] {
    fn visualize<W: Write>(&self, mut drawer: Drawer<W>) -> Result<Drawer<W>> {
        drawer.write(format!("[hex: {}]", to_hex(self)).as_bytes())?;
        Ok(drawer)
    }
}

/// `visualize` shortcut to write straight into stdout offhand
pub fn visualize_stdout<T: Visualize + ?Sized>(value: &T) -> Result<()> {
    let mut out = std::io::stdout().lock();
    let mut drawer = value.visualize(Drawer::new(&mut out))?;
    drawer.flush()
}

/// `visualize` shortcut to write into provided buffer, should be a `Vec` not a
/// slice because slices won't grow if needed.
pub fn visualize_to_vec<T: Visualize + ?Sized>(v: &mut Vec<u8>, value: &T) {
    let drawer = Drawer::new(v);
    value
        .visualize(drawer)
        .expect("error while writing into vector");
}
