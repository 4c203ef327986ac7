//! The shipped constellation table.

use crate::catalog::types::Catalog;
use crate::catalog::types::CatalogEntry;
use crate::catalog::types::CatalogError;
use crate::catalog::types::StarEntry;

impl Catalog {
    /// The shipped chart: twelve zodiac constellations.
    pub fn standard() -> Result<Self, CatalogError> { Self::from_entries(&ZODIAC) }
}

/// The twelve zodiac constellations in zodiacal order, a handful of bright
/// named stars each. Positions are J2000-ish right ascension hours and
/// declination degrees, rounded to four places. Good enough for a chart,
/// not an ephemeris.
const ZODIAC: [CatalogEntry; 12] = [
    CatalogEntry {
        name:        "Aries",
        stars:       &[
            StarEntry { name: "Hamal", ra_hours: 2.1196, dec_degrees: 23.4624 },
            StarEntry { name: "Sheratan", ra_hours: 1.9113, dec_degrees: 20.8080 },
            StarEntry { name: "Mesarthim", ra_hours: 1.9107, dec_degrees: 19.2933 },
        ],
        connections: &[[2, 1], [1, 0]],
        info:        "Aries is symbolized by the ram and is associated with boldness and leadership.",
        month:       "March",
    },
    CatalogEntry {
        name:        "Taurus",
        stars:       &[
            StarEntry { name: "Aldebaran", ra_hours: 4.5987, dec_degrees: 16.5093 },
            StarEntry { name: "Elnath", ra_hours: 5.4382, dec_degrees: 28.6075 },
            StarEntry { name: "Alcyone", ra_hours: 3.7914, dec_degrees: 24.1051 },
            StarEntry { name: "Atlas", ra_hours: 3.6293, dec_degrees: 24.0534 },
            StarEntry { name: "Electra", ra_hours: 3.7036, dec_degrees: 24.1133 },
        ],
        connections: &[[2, 3], [3, 4], [2, 0], [0, 1]],
        info:        "Taurus represents the bull and is linked with stability and strength.",
        month:       "April",
    },
    CatalogEntry {
        name:        "Gemini",
        stars:       &[
            StarEntry { name: "Castor", ra_hours: 7.5767, dec_degrees: 31.8883 },
            StarEntry { name: "Pollux", ra_hours: 7.7553, dec_degrees: 28.0262 },
            StarEntry { name: "Wasat", ra_hours: 7.3354, dec_degrees: 21.9823 },
            StarEntry { name: "Mebsuta", ra_hours: 6.3783, dec_degrees: 25.1311 },
            StarEntry { name: "Tejat", ra_hours: 6.8640, dec_degrees: 22.5052 },
        ],
        connections: &[[0, 1], [1, 2], [2, 4], [4, 3]],
        info:        "Gemini symbolizes twins and is associated with communication and duality.",
        month:       "May",
    },
    CatalogEntry {
        name:        "Cancer",
        stars:       &[
            StarEntry { name: "Acubens", ra_hours: 8.9747, dec_degrees: 11.8575 },
            StarEntry { name: "Altarf", ra_hours: 8.1587, dec_degrees: 9.1856 },
            StarEntry { name: "Asellus Borealis", ra_hours: 8.1390, dec_degrees: 20.0000 },
            StarEntry { name: "Asellus Australis", ra_hours: 8.7448, dec_degrees: 18.1543 },
        ],
        connections: &[[1, 2], [2, 3], [3, 0]],
        info:        "Cancer, the crab, is a nurturing and emotional sign.",
        month:       "June",
    },
    CatalogEntry {
        name:        "Leo",
        stars:       &[
            StarEntry { name: "Regulus", ra_hours: 10.1395, dec_degrees: 11.9672 },
            StarEntry { name: "Denebola", ra_hours: 11.8177, dec_degrees: 14.5721 },
            // Zosma and Chort sit a tenth of a plane-unit apart; they draw
            // as a single dot at overview scale
            StarEntry { name: "Zosma", ra_hours: 11.2373, dec_degrees: 20.5237 },
            StarEntry { name: "Chort", ra_hours: 11.2351, dec_degrees: 20.5233 },
            StarEntry { name: "Algieba", ra_hours: 10.3326, dec_degrees: 19.8415 },
        ],
        connections: &[[0, 4], [4, 3], [3, 2], [2, 1]],
        info:        "Leo is the lion, representing courage, pride, and creativity.",
        month:       "July",
    },
    CatalogEntry {
        name:        "Virgo",
        stars:       &[
            StarEntry { name: "Spica", ra_hours: 13.4199, dec_degrees: -11.1613 },
            StarEntry { name: "Vindemiatrix", ra_hours: 13.0362, dec_degrees: 10.9591 },
            StarEntry { name: "Porrima", ra_hours: 12.6943, dec_degrees: 10.3702 },
            StarEntry { name: "Zaniah", ra_hours: 13.0648, dec_degrees: -0.5957 },
        ],
        connections: &[[0, 3], [3, 2], [2, 1]],
        info:        "Virgo is linked with logic, analysis, and service.",
        month:       "August",
    },
    CatalogEntry {
        name:        "Libra",
        stars:       &[
            StarEntry { name: "Zubenelgenubi", ra_hours: 14.8451, dec_degrees: -16.0418 },
            StarEntry { name: "Zubeneschamali", ra_hours: 15.2916, dec_degrees: -9.3826 },
            StarEntry { name: "Brachium", ra_hours: 15.0733, dec_degrees: -25.2819 },
        ],
        connections: &[[0, 1], [0, 2]],
        info:        "Libra, the scales, stands for balance, harmony, and justice.",
        month:       "September",
    },
    CatalogEntry {
        name:        "Scorpius",
        stars:       &[
            StarEntry { name: "Antares", ra_hours: 16.4901, dec_degrees: -26.4319 },
            StarEntry { name: "Shaula", ra_hours: 17.5601, dec_degrees: -37.1038 },
            StarEntry { name: "Sargas", ra_hours: 17.6219, dec_degrees: -42.9978 },
            StarEntry { name: "Dschubba", ra_hours: 16.0055, dec_degrees: -22.6217 },
        ],
        connections: &[[0, 3], [3, 1], [1, 2]],
        info:        "Scorpius is the scorpion, intense and passionate.",
        month:       "October",
    },
    CatalogEntry {
        name:        "Sagittarius",
        stars:       &[
            StarEntry { name: "Kaus Australis", ra_hours: 18.4029, dec_degrees: -34.3846 },
            StarEntry { name: "Nunki", ra_hours: 18.9211, dec_degrees: -26.2967 },
            StarEntry { name: "Ascella", ra_hours: 18.6156, dec_degrees: -29.8282 },
            StarEntry { name: "Kaus Media", ra_hours: 18.0790, dec_degrees: -29.5778 },
        ],
        connections: &[[0, 2], [2, 1], [1, 3]],
        info:        "Sagittarius is the archer, a sign of adventure and exploration.",
        month:       "November",
    },
    CatalogEntry {
        name:        "Capricornus",
        stars:       &[
            StarEntry { name: "Deneb Algedi", ra_hours: 21.7367, dec_degrees: -16.1273 },
            StarEntry { name: "Dabih", ra_hours: 20.2946, dec_degrees: -14.7814 },
            StarEntry { name: "Nashira", ra_hours: 21.2749, dec_degrees: -16.6622 },
        ],
        connections: &[[1, 2], [2, 0]],
        info:        "Capricornus, the sea-goat, symbolizes discipline and ambition.",
        month:       "December",
    },
    CatalogEntry {
        name:        "Aquarius",
        stars:       &[
            StarEntry { name: "Sadalmelik", ra_hours: 22.0967, dec_degrees: -0.3197 },
            StarEntry { name: "Sadalsuud", ra_hours: 21.7367, dec_degrees: -5.5717 },
            StarEntry { name: "Skat", ra_hours: 22.8779, dec_degrees: -15.8208 },
        ],
        connections: &[[0, 1], [1, 2]],
        info:        "Aquarius, the water-bearer, represents innovation and individuality.",
        month:       "January",
    },
    CatalogEntry {
        name:        "Pisces",
        stars:       &[
            StarEntry { name: "Alrescha", ra_hours: 2.0333, dec_degrees: 2.7639 },
            StarEntry { name: "Fum al Samakah", ra_hours: 1.4312, dec_degrees: 15.1835 },
            StarEntry { name: "Kullat Nunu", ra_hours: 0.9137, dec_degrees: 3.3964 },
        ],
        connections: &[[0, 1], [1, 2]],
        info:        "Pisces is the sign of empathy, imagination, and intuition.",
        month:       "February",
    },
];
