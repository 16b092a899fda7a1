//! src/demo.rs
//! The fixed console report: three vectors, their Cartesian and polar
//! coordinates, three dot products and two cross products.

use crate::capability::{Cross, Euclidean, Polar};
use crate::decorator::Decorator;
use crate::error::Result;
use crate::polar::PolarView;
use crate::vector::{Bracketed, Vector};
use log::debug;
use std::io::{self, Write};

/// Write one "DLA WEKTORA n" block.
///
/// `polar` supplies the angle; for 3-D vectors it views the xy projection.
fn write_block<W: Write>(
    out: &mut W,
    index: usize,
    carrier: &dyn Euclidean,
    polar: &PolarView,
) -> io::Result<()> {
    let cartesian = Bracketed(carrier.components());
    writeln!(out, "DLA WEKTORA {}:", index)?;
    writeln!(out, "WSPÓŁRZĘDNE KARTEZJAŃSKIE: {}", cartesian)?;
    // `{:?}` keeps the trailing `.0` on whole numbers
    writeln!(
        out,
        "WSPÓŁRZĘDNE BIEGUNOWE: długość = {:?}, kąt = {:?}",
        carrier.abs(),
        polar.angle()
    )
}

/// Render the full report into `out`.
pub fn render<W: Write>(out: &mut W) -> Result<()> {
    // adapter, extension, decorator
    let v1 = PolarView::adapt(Vector::planar(2.0, 3.0))?;
    let v2 = Vector::spatial(2.0, 1.0, 3.0);
    let v3 = Decorator::new(Vector::planar(1.0, 2.0), 4.0);
    debug!("rendering report for v1 = {}, v2 = {}, v3 = {}", v1, v2, v3);

    let base = v2.xy();
    let v2_polar = PolarView::new(base.x(), base.y());
    let v3_polar = PolarView::of_projection(v3.inner());

    writeln!(out)?;
    write_block(out, 1, &v1, &v1)?;
    writeln!(out)?;
    write_block(out, 2, &v2, &v2_polar)?;
    writeln!(out)?;
    write_block(out, 3, &v3, &v3_polar)?;
    writeln!(out)?;

    writeln!(out, "ILOCZYNY SKALARNE:")?;
    writeln!(out, "W1 o W2: {:?}", v1.dot(&v2))?;
    writeln!(out, "W3 o W3: {:?}", v3.dot(&v3))?;
    writeln!(out, "W2 o W3: {:?}", v2.dot(&v3))?;
    writeln!(out)?;

    // v1 is planar, so the left-hand side is v2 decorated with z = 0
    let lifted = Decorator::new(v2, 0.0);
    writeln!(out, "ILOCZYNY WEKTOROWE:")?;
    writeln!(out, "W1 x W2: {}", lifted.cross(&v3))?;
    writeln!(out, "W2 x W3: {}", v2.cross(&v3))?;
    Ok(())
}

/// Render the report to standard output.
pub fn run() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&mut out)?;
    out.flush()?;
    Ok(())
}
