use bevy::prelude::*;
use thiserror::Error;

use crate::catalog::projection::plane_position;

/// Index of a constellation in the catalog's fixed ordering. Stable for the
/// life of the app because the catalog never changes after startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub struct ConstellationId(pub usize);

/// Source record for one star, as compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct StarEntry {
    pub name:        &'static str,
    pub ra_hours:    f32,
    pub dec_degrees: f32,
}

/// Source record for one constellation, as compiled into the binary.
/// `connections` holds pairs of indices into `stars`.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name:        &'static str,
    pub stars:       &'static [StarEntry],
    pub connections: &'static [[usize; 2]],
    pub info:        &'static str,
    pub month:       &'static str,
}

/// A star with its projected plane-space position.
#[derive(Debug, Clone)]
pub struct Star {
    pub name:     &'static str,
    pub position: Vec2,
}

/// Plane-space axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn size(&self) -> Vec2 { self.max - self.min }

    pub fn center(&self) -> Vec2 { (self.min + self.max) / 2.0 }

    fn from_points(mut points: impl Iterator<Item = Vec2>) -> Option<Self> {
        let first = points.next()?;
        Some(points.fold(Self { min: first, max: first }, |bounds, point| Self {
            min: bounds.min.min(point),
            max: bounds.max.max(point),
        }))
    }
}

/// A constellation with projected star positions and precomputed bounds.
///
/// Only constructed through [`Catalog::from_entries`], which validates the
/// source record, so connection indices are always in range and the bounds
/// always have positive extent on both axes.
#[derive(Debug, Clone)]
pub struct Constellation {
    pub name:        &'static str,
    pub stars:       Vec<Star>,
    pub connections: &'static [[usize; 2]],
    pub info:        &'static str,
    pub month:       &'static str,
    bounds:          Bounds,
}

impl Constellation {
    fn from_entry(entry: &CatalogEntry) -> Result<Self, CatalogError> {
        let stars: Vec<Star> = entry
            .stars
            .iter()
            .map(|star| Star {
                name:     star.name,
                position: plane_position(star.ra_hours, star.dec_degrees),
            })
            .collect();

        for &[a, b] in entry.connections {
            for star in [a, b] {
                if star >= stars.len() {
                    return Err(CatalogError::ConnectionOutOfRange {
                        constellation: entry.name,
                        a,
                        b,
                        star,
                        star_count: stars.len(),
                    });
                }
            }
        }

        let bounds = Bounds::from_points(stars.iter().map(|star| star.position))
            .ok_or(CatalogError::NoStars { constellation: entry.name })?;

        let size = bounds.size();
        if size.x == 0.0 || size.y == 0.0 {
            return Err(CatalogError::DegenerateBounds {
                constellation: entry.name,
                width:  size.x,
                height: size.y,
            });
        }

        Ok(Self {
            name: entry.name,
            stars,
            connections: entry.connections,
            info: entry.info,
            month: entry.month,
            bounds,
        })
    }

    pub const fn bounds(&self) -> Bounds { self.bounds }
}

/// The ordered, read-only constellation catalog. Inserted as a resource at
/// startup and never mutated afterwards.
#[derive(Resource, Debug, Clone)]
pub struct Catalog {
    constellations: Vec<Constellation>,
}

impl Catalog {
    /// Projects and validates every entry. The first malformed entry fails
    /// the whole catalog; a half-valid chart is worse than no chart.
    pub fn from_entries(entries: &[CatalogEntry]) -> Result<Self, CatalogError> {
        let constellations = entries
            .iter()
            .map(Constellation::from_entry)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { constellations })
    }

    pub fn get(&self, id: ConstellationId) -> Option<&Constellation> {
        self.constellations.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConstellationId, &Constellation)> {
        self.constellations
            .iter()
            .enumerate()
            .map(|(index, constellation)| (ConstellationId(index), constellation))
    }

    pub const fn len(&self) -> usize { self.constellations.len() }

    pub const fn is_empty(&self) -> bool { self.constellations.is_empty() }
}

/// Rejection reasons for a malformed catalog entry, raised once at startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("constellation {constellation} has no stars")]
    NoStars { constellation: &'static str },

    #[error(
        "constellation {constellation}: connection [{a}, {b}] references star {star} but only {star_count} stars exist"
    )]
    ConnectionOutOfRange {
        constellation: &'static str,
        a:             usize,
        b:             usize,
        star:          usize,
        star_count:    usize,
    },

    #[error("constellation {constellation}: degenerate bounds ({width} x {height} plane-units)")]
    DegenerateBounds {
        constellation: &'static str,
        width:         f32,
        height:        f32,
    },
}

#[cfg(test)]
mod catalog_tests {
    use super::*;

    /// Right triangle of stars spanning 1 RA hour by 10 declination degrees,
    /// so the projected bounds are 40 x 100 plane-units.
    const TRIANGLE: CatalogEntry = CatalogEntry {
        name:        "Triangle",
        stars:       &[
            StarEntry { name: "A", ra_hours: 11.0, dec_degrees: 10.0 },
            StarEntry { name: "B", ra_hours: 12.0, dec_degrees: 10.0 },
            StarEntry { name: "C", ra_hours: 12.0, dec_degrees: 20.0 },
        ],
        connections: &[[0, 1], [1, 2]],
        info:        "A test triangle.",
        month:       "Smarch",
    };

    fn create_test_catalog() -> Catalog {
        Catalog::from_entries(&[TRIANGLE]).unwrap()
    }

    #[test]
    fn test_builds_valid_entry() {
        let catalog = create_test_catalog();
        assert_eq!(catalog.len(), 1);

        let constellation = catalog.get(ConstellationId(0)).unwrap();
        assert_eq!(constellation.name, "Triangle");
        assert_eq!(constellation.month, "Smarch");
        assert_eq!(constellation.stars.len(), 3);
        assert_eq!(constellation.stars[0].name, "A");
        assert_eq!(constellation.stars[0].position, plane_position(11.0, 10.0));
        assert_eq!(constellation.connections, &[[0, 1], [1, 2]]);
    }

    #[test]
    fn test_bounds_cover_all_stars() {
        let catalog = create_test_catalog();
        let bounds = catalog.get(ConstellationId(0)).unwrap().bounds();

        assert_eq!(bounds.min, Vec2::new(-40.0, -200.0));
        assert_eq!(bounds.max, Vec2::new(0.0, -100.0));
        assert_eq!(bounds.size(), Vec2::new(40.0, 100.0));
        assert_eq!(bounds.center(), Vec2::new(-20.0, -150.0));
    }

    #[test]
    fn test_ids_follow_entry_order() {
        let mut second = TRIANGLE;
        second.name = "Second";

        let catalog = Catalog::from_entries(&[TRIANGLE, second]).unwrap();
        let names: Vec<_> = catalog.iter().map(|(id, c)| (id, c.name)).collect();

        assert_eq!(
            names,
            vec![
                (ConstellationId(0), "Triangle"),
                (ConstellationId(1), "Second"),
            ]
        );
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let catalog = create_test_catalog();
        assert!(catalog.get(ConstellationId(1)).is_none());
    }

    #[test]
    fn test_rejects_connection_index_out_of_range() {
        let mut entry = TRIANGLE;
        entry.connections = &[[0, 3]];

        match Catalog::from_entries(&[entry]) {
            Err(CatalogError::ConnectionOutOfRange { star, star_count, .. }) => {
                assert_eq!(star, 3);
                assert_eq!(star_count, 3);
            },
            other => panic!("Expected ConnectionOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_empty_star_list() {
        let mut entry = TRIANGLE;
        entry.stars = &[];
        entry.connections = &[];

        match Catalog::from_entries(&[entry]) {
            Err(CatalogError::NoStars { constellation }) => {
                assert_eq!(constellation, "Triangle");
            },
            other => panic!("Expected NoStars, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_stars_on_a_horizontal_line() {
        let mut entry = TRIANGLE;
        entry.stars = &[
            StarEntry { name: "A", ra_hours: 11.0, dec_degrees: 10.0 },
            StarEntry { name: "B", ra_hours: 12.0, dec_degrees: 10.0 },
        ];
        entry.connections = &[[0, 1]];

        match Catalog::from_entries(&[entry]) {
            Err(CatalogError::DegenerateBounds { width, height, .. }) => {
                assert_eq!(width, 40.0);
                assert_eq!(height, 0.0);
            },
            other => panic!("Expected DegenerateBounds, got {other:?}"),
        }
    }

    #[test]
    fn test_first_bad_entry_fails_the_whole_catalog() {
        let mut bad = TRIANGLE;
        bad.stars = &[];
        bad.connections = &[];

        assert!(Catalog::from_entries(&[TRIANGLE, bad]).is_err());
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::from_entries(&[]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }
}
