use chrono::Utc;
use solcal::{Body, Catalog, Longitude, Result};

fn main() -> Result<()> {
    let catalog = Catalog::builtin();
    let now = catalog.earth_reading_from_utc(Utc::now());
    println!("Earth (lon 0): {now}");

    let greenwich = Longitude::ZERO;
    for body in [Body::Mars, Body::Phobos, Body::Saturn] {
        let there = catalog.convert(Body::Earth, body, &now, greenwich, greenwich)?;
        println!("{body} (lon 0): {there}");
    }

    let olympus_mons = Longitude::new(-133.8)?;
    let local = catalog.convert(Body::Earth, Body::Mars, &now, greenwich, olympus_mons)?;
    println!("Mars ({olympus_mons}): {local}");
    Ok(())
}
