use protodisk::ThermalZones;
use units::Length;

use crate::formation_zone::FormationZone;

fn solar_zones() -> ThermalZones {
    ThermalZones::from_luminosity(1.0)
}

#[test]
fn test_radial_regions_are_exclusive() {
    let zones = solar_zones();

    for au in [0.05, 0.5, 1.2, 2.7, 5.0, 9.9, 10.0, 40.0] {
        let z = FormationZone::classify(Length::from_au(au), &zones);
        let count = [z.inside_snow, z.beyond_snow, z.far]
            .iter()
            .filter(|&&flag| flag)
            .count();
        assert_eq!(count, 1, "Exactly one region expected at {} AU", au);
    }
}

#[test]
fn test_classification_against_solar_lines() {
    let zones = solar_zones();

    let hot = FormationZone::classify(Length::from_au(0.05), &zones);
    assert!(hot.inside_silicate && hot.inside_snow);

    let earth = FormationZone::classify(Length::from_au(1.0), &zones);
    assert!(earth.in_habitable_zone && earth.inside_snow && !earth.inside_silicate);

    let jupiter = FormationZone::classify(Length::from_au(5.2), &zones);
    assert!(jupiter.beyond_snow && !jupiter.far);

    let kuiper = FormationZone::classify(Length::from_au(30.0), &zones);
    assert!(kuiper.far);
}

#[test]
fn test_solids_boost_grows_outward() {
    let zones = solar_zones();
    let boost = |au: f64| FormationZone::classify(Length::from_au(au), &zones).solids_boost();

    assert_eq!(boost(1.0), 1.0);
    assert_eq!(boost(5.0), 1.6);
    assert_eq!(boost(20.0), 2.2);
}

#[test]
fn test_dark_star_puts_everything_far() {
    let zones = ThermalZones::from_luminosity(0.0);
    let z = FormationZone::classify(Length::from_au(1.0), &zones);
    assert!(z.far && !z.inside_snow && !z.beyond_snow && !z.in_habitable_zone);
}
