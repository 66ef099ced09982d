pub mod bitmap;
pub mod code;
pub mod error;
pub mod patterns;
pub mod raster;
pub mod scan;

pub use bitmap::PixelGrid;
pub use code::Ean8;
pub use error::{DecodeError, ParseError, ScanError, ValidationError};
pub use raster::Geometry;
pub use scan::ScanResult;

/// Rasterize a validated code and serialize it as a plain PBM bitmap.
pub fn encode(code: &Ean8, geometry: Geometry) -> Vec<u8> {
    bitmap::serialize(&raster::rasterize(code, geometry))
}

/// Parse a plain PBM bitmap and scan it for an EAN-8 symbol.
pub fn decode(bytes: &[u8]) -> Result<ScanResult, DecodeError> {
    let grid = bitmap::parse(bytes)?;
    Ok(scan::scan(&grid)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trip() {
        let code: Ean8 = "96385074".parse().unwrap();
        let bytes = encode(&code, Geometry::default());
        let result = decode(&bytes).unwrap();
        assert!(result.is_complete());
        assert_eq!(result.to_string(), "96385074");
    }

    #[test]
    fn round_trip_across_geometries() {
        let code: Ean8 = "55123457".parse().unwrap();
        for (margin, module_width, bar_height) in
            [(0, 1, 1), (1, 1, 10), (4, 3, 50), (10, 5, 80), (2, 7, 30)]
        {
            let geom = Geometry { margin, module_width, bar_height };
            let result = decode(&encode(&code, geom)).unwrap();
            assert_eq!(result.to_string(), "55123457", "geometry {geom:?}");
            assert_eq!(result.margin, margin);
            assert_eq!(result.module_width, module_width);
        }
    }
}
