use serde::Serialize;

/// The 16 points of the compass rose, clockwise from north.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CompassPoint {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

const SECTOR_DEG: f64 = 360.0 / 16.0;

impl CompassPoint {
    pub const fn all() -> &'static [CompassPoint; 16] {
        use CompassPoint::*;
        &[N, NNE, NE, ENE, E, ESE, SE, SSE, S, SSW, SW, WSW, W, WNW, NW, NNW]
    }

    /// Resolve a wind bearing (degrees clockwise from true north) to the
    /// point whose 22.5° sector contains it. Sectors are centred on each
    /// point, so north covers `[348.75, 11.25)`.
    ///
    /// Bearings outside `[0, 360)`, including negative ones, are normalised
    /// first. A non-finite bearing resolves to north.
    pub fn from_bearing(bearing_deg: f64) -> Self {
        if !bearing_deg.is_finite() {
            return CompassPoint::N;
        }

        let normalized = bearing_deg.rem_euclid(360.0);
        // `normalized` may round up to exactly 360.0, and the last sector
        // rounds up to 16; both wrap to north.
        let index = (normalized / SECTOR_DEG).round() as usize % 16;
        Self::all()[index]
    }

    pub fn as_str(&self) -> &'static str {
        use CompassPoint::*;
        match self {
            N => "N",
            NNE => "NNE",
            NE => "NE",
            ENE => "ENE",
            E => "E",
            ESE => "ESE",
            SE => "SE",
            SSE => "SSE",
            S => "S",
            SSW => "SSW",
            SW => "SW",
            WSW => "WSW",
            W => "W",
            WNW => "WNW",
            NW => "NW",
            NNW => "NNW",
        }
    }
}

impl std::fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
