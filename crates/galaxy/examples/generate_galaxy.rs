//! Generate a galaxy and print a summary of every star system.
//!
//! Usage: cargo run -p galaxy --example generate_galaxy -- [name] [config.toml]
//!
//! Set RUST_LOG=debug to see per-star generation details.

use galaxy::{BodyRef, GalaxyConfig, GalaxyDirectory};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "milky-way".to_string());
    let config = match args.next() {
        Some(path) => GalaxyConfig::load(path)?,
        None => GalaxyConfig::with_star_count(40),
    };

    let mut galaxy = GalaxyDirectory::named(&name, config);
    galaxy.advance(0.0);

    println!(
        "Galaxy '{}' (session {}), radius {:.1} GU, {} bodies",
        name,
        galaxy.session_id(),
        galaxy.galaxy_radius().unwrap_or_default(),
        galaxy.body_count()
    );

    for body in galaxy.bodies() {
        match body {
            BodyRef::Star(star) => println!(
                "\n{:>4} {:<24} {} {:<14} {:>7.2} M☉  L={:<10.3e} lock {:.1} AU",
                star.id.0,
                star.name,
                star.properties.spectral_class,
                star.phase().to_string(),
                star.properties.current_mass.to_solar_masses(),
                star.properties.luminosity,
                star.lock_radius().to_au()
            ),
            BodyRef::Planet(planet) => println!(
                "     {:<8} {:<24} {:<12} a={:>7.3} AU  {:>8.2} M⊕  {:>5.2} R⊕{}",
                planet.id.to_string(),
                planet.name,
                planet.planet_type.to_string(),
                planet.semi_major_axis().to_au(),
                planet.mass.to_earth_masses(),
                planet.radius().to_earth_radii(),
                if planet.migrated { "  (migrated)" } else { "" }
            ),
        }
    }

    Ok(())
}
