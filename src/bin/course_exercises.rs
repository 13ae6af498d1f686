/// Worked examples: prints the answers to the vector, line and plane exercises.
///
/// Usage:
///   cargo run --bin course_exercises
///   RUST_LOG=linalgebra=trace cargo run --bin course_exercises

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use linalgebra::{AngleUnit, Line, LinearSystem, Plane, Vector};

fn vector(coords: &[&str]) -> Result<Vector> {
    Vector::parse(coords).with_context(|| format!("bad coordinates {coords:?}"))
}

fn line(normal: [&str; 2], constant: &str) -> Result<Line> {
    Ok(Line::new(vector(&normal)?, constant.parse::<linalgebra::Decimal>()?)?)
}

fn plane(normal: [&str; 3], constant: &str) -> Result<Plane> {
    Ok(Plane::new(vector(&normal)?, constant.parse::<linalgebra::Decimal>()?)?)
}

fn vectors() -> Result<()> {
    println!("== Vectors");
    println!(
        "magnitude: {:.3}",
        vector(&["-0.221", "7.437"])?.magnitude().round_dp(3)
    );
    println!("normalized: {}", vector(&["5.581", "-2.136"])?.normalized()?);
    println!(
        "dot: {}",
        vector(&["7.887", "4.138"])?.dot(&vector(&["-8.802", "6.776"])?)?
    );
    println!(
        "angle (degrees): {:.3}",
        vector(&["7.35", "0.221", "5.188"])?
            .angle_between(&vector(&["2.751", "8.259", "3.985"])?, AngleUnit::Degrees)?
    );
    println!(
        "projection: {}",
        vector(&["3.039", "1.879"])?.projected_onto(&vector(&["0.825", "2.036"])?)?
    );
    println!(
        "cross: {}",
        vector(&["8.462", "7.893", "-8.187"])?.cross(&vector(&["6.984", "-5.975", "4.778"])?)?
    );
    println!(
        "triangle area: {:.3}",
        vector(&["1.5", "9.547", "3.691"])?
            .triangle_area(&vector(&["-6.007", "0.124", "5.772"])?)?
            .round_dp(3)
    );
    Ok(())
}

fn lines() -> Result<()> {
    println!("== Lines");
    let pairs = [
        (line(["4.046", "2.836"], "1.21")?, line(["10.115", "7.09"], "3.025")?),
        (line(["7.204", "3.182"], "8.68")?, line(["8.172", "4.114"], "9.883")?),
        (line(["1.182", "5.562"], "6.744")?, line(["1.773", "8.343"], "9.525")?),
    ];
    for (l1, l2) in &pairs {
        println!("{}  &  {}  ->  {}", l1, l2, l1.intersection_with(l2)?);
    }
    Ok(())
}

fn planes() -> Result<()> {
    println!("== Planes");
    let pairs = [
        (
            plane(["-0.412", "3.806", "0.728"], "-3.46")?,
            plane(["1.03", "-9.515", "-1.82"], "8.65")?,
        ),
        (
            plane(["2.611", "5.528", "0.283"], "4.6")?,
            plane(["7.715", "8.306", "5.342"], "3.76")?,
        ),
        (
            plane(["-7.926", "8.625", "-7.212"], "-7.952")?,
            plane(["-2.642", "2.875", "-2.404"], "-2.443")?,
        ),
    ];
    for (p1, p2) in &pairs {
        let relation = if p1.is_coincident_to(p2) {
            "coincident"
        } else if p1.is_parallel_to(p2) {
            "parallel"
        } else {
            "neither"
        };
        println!("{}  &  {}  ->  {}", p1, p2, relation);
    }
    Ok(())
}

fn system() -> Result<()> {
    println!("== Linear system");
    let mut s: LinearSystem = LinearSystem::new(vec![
        "x_1 + x_2 + x_3 = 1".parse()?,
        "x_2 = 2".parse()?,
        "x_1 + x_2 - x_3 = 3".parse()?,
        "x_1 - 2x_3 = 2".parse()?,
    ]);
    println!("{s}");
    println!("first nonzero terms: {:?}", s.indices_of_first_nonzero_terms());

    s.add_scaled_row_to_row(-1, 0, 2)?;
    s.add_scaled_row_to_row(-1, 0, 3)?;
    s.swap_rows(1, 3)?;
    println!("{s}");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    vectors()?;
    lines()?;
    planes()?;
    system()?;
    Ok(())
}
