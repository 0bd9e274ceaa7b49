//! 2-D geometry values.
//!
//! Each component is written with [`WriteStream::write_f64`], in declaration order, so unlike
//! the fixed-layout path these encodings are big-endian and portable.

use crate::{reader, writer, ReadStream, WriteStream};
use std::io::Write;

/// A point in a 2-D coordinate space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// A width and a height.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    /// Extent along the x axis.
    pub width: f64,
    /// Extent along the y axis.
    pub height: f64,
}

/// A 2-D affine transform, mapping `(x, y)` to `(a*x + c*y + tx, b*x + d*y + ty)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AffineTransform {
    /// Contribution of `x` to the new `x`.
    pub a: f64,
    /// Contribution of `x` to the new `y`.
    pub b: f64,
    /// Contribution of `y` to the new `x`.
    pub c: f64,
    /// Contribution of `y` to the new `y`.
    pub d: f64,
    /// Horizontal translation.
    pub tx: f64,
    /// Vertical translation.
    pub ty: f64,
}

impl AffineTransform {
    /// The transform that maps every point to itself.
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Applies the transform to a point.
    pub fn apply(&self, p: Point) -> Point {
        Point {
            x: self.a * p.x + self.c * p.y + self.tx,
            y: self.b * p.x + self.d * p.y + self.ty,
        }
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<W: Write> WriteStream<W> {
    /// Writes a [`Point`] as two `f64` values (16 bytes).
    pub fn write_point(&mut self, value: Point) -> writer::Result<()> {
        self.write_f64(value.x)?;
        self.write_f64(value.y)
    }

    /// Writes a [`Size`] as two `f64` values (16 bytes).
    pub fn write_size(&mut self, value: Size) -> writer::Result<()> {
        self.write_f64(value.width)?;
        self.write_f64(value.height)
    }

    /// Writes an [`AffineTransform`] as six `f64` values (48 bytes).
    pub fn write_transform(&mut self, value: &AffineTransform) -> writer::Result<()> {
        for v in [value.a, value.b, value.c, value.d, value.tx, value.ty] {
            self.write_f64(v)?;
        }
        Ok(())
    }
}

impl ReadStream<'_> {
    /// Reads a [`Point`] written by [`WriteStream::write_point`].
    pub fn read_point(&mut self) -> reader::Result<Point> {
        let x = self.read_f64()?;
        let y = self.read_f64()?;
        Ok(Point { x, y })
    }

    /// Reads a [`Size`] written by [`WriteStream::write_size`].
    pub fn read_size(&mut self) -> reader::Result<Size> {
        let width = self.read_f64()?;
        let height = self.read_f64()?;
        Ok(Size { width, height })
    }

    /// Reads an [`AffineTransform`] written by [`WriteStream::write_transform`].
    pub fn read_transform(&mut self) -> reader::Result<AffineTransform> {
        Ok(AffineTransform {
            a: self.read_f64()?,
            b: self.read_f64()?,
            c: self.read_f64()?,
            d: self.read_f64()?,
            tx: self.read_f64()?,
            ty: self.read_f64()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_is_big_endian() {
        let mut w = WriteStream::new();
        w.write_point(Point { x: 0.25, y: -2.0 }).unwrap();
        assert_eq!(
            w.as_bytes(),
            [
                0x3f, 0xd0, 0, 0, 0, 0, 0, 0, //
                0xc0, 0x00, 0, 0, 0, 0, 0, 0,
            ]
        );
    }

    #[test]
    fn geometry_round_trip() {
        let t = AffineTransform {
            a: 2.0,
            b: 0.5,
            c: -0.5,
            d: 2.0,
            tx: 10.0,
            ty: -3.25,
        };
        let size = Size {
            width: 640.0,
            height: 480.0,
        };

        let mut w = WriteStream::new();
        w.write_transform(&t).unwrap();
        w.write_size(size).unwrap();
        assert_eq!(w.len(), 48 + 16);

        let bytes = w.snapshot();
        let mut r = ReadStream::new(&bytes);
        assert_eq!(r.read_transform(), Ok(t));
        assert_eq!(r.read_size(), Ok(size));
        assert_eq!(r.bytes_available(), 0);
    }

    #[test]
    fn identity_maps_points_to_themselves() {
        let p = Point { x: 3.0, y: -7.5 };
        assert_eq!(AffineTransform::default().apply(p), p);
    }
}
