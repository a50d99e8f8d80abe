use approx::assert_relative_eq;

use crate::time::{Time, UNIVERSE_AGE_YEARS};

#[test]
fn test_time_conversions() {
    let sun_age = Time::from_years(4.57e9);
    assert_relative_eq!(sun_age.to_gyr(), 4.57);
    assert_relative_eq!(sun_age.to_myr(), 4570.0);

    assert_relative_eq!(Time::from_myr(1.0).to_years(), 1.0e6);
    assert_relative_eq!(Time::from_gyr(13.8).to_years(), UNIVERSE_AGE_YEARS);
}

#[test]
fn test_time_ratio() {
    let age = Time::from_gyr(5.0);
    let lifetime = Time::from_gyr(10.0);
    assert_relative_eq!(age / lifetime, 0.5);
    assert_relative_eq!((lifetime - age).to_gyr(), 5.0);
    assert_relative_eq!((lifetime + age).to_gyr(), 15.0);
}
