use crate::convert::error::ConvertError;
use crate::convert::types::{ConversionResults, ConversionUnit, Measurement};
use crate::convert::viewport::Viewport;

/// Converts lengths between px, vw and vh for a fixed viewport
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    viewport: Viewport,
}

impl Converter {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    /// Express `value` (given in `from`) in all three units
    pub fn convert(
        &self,
        value: f64,
        from: ConversionUnit,
    ) -> Result<ConversionResults, ConvertError> {
        if !value.is_finite() {
            return Err(ConvertError::NonFiniteValue(value));
        }

        let px = value * self.viewport.dimension(from);
        let results = ConversionResults {
            px,
            vw: px / self.viewport.width() * 100.0,
            vh: px / self.viewport.height() * 100.0,
        };
        if let Some((_, overflow)) = results.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConvertError::NonFiniteValue(overflow));
        }

        log::debug!(
            "{}{} -> {}px / {}vw / {}vh ({}x{})",
            value,
            from,
            results.px,
            results.vw,
            results.vh,
            self.viewport.width(),
            self.viewport.height()
        );

        Ok(results)
    }

    pub fn convert_to(
        &self,
        value: f64,
        from: ConversionUnit,
        to: ConversionUnit,
    ) -> Result<f64, ConvertError> {
        Ok(self.convert(value, from)?.get(to))
    }

    pub fn convert_measurement(
        &self,
        measurement: &Measurement,
    ) -> Result<ConversionResults, ConvertError> {
        self.convert(measurement.value, measurement.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_convert_from_px() {
        let converter = Converter::default();
        let results = converter.convert(192.0, ConversionUnit::Px).unwrap();
        assert_eq!(results.px, 192.0);
        assert!(approx(results.vw, 10.0));
        assert!(approx(results.vh, 17.777_777_777_777_78));
    }

    #[test]
    fn test_convert_from_vw() {
        let converter = Converter::default();
        let results = converter.convert(50.0, ConversionUnit::Vw).unwrap();
        assert!(approx(results.px, 960.0));
        assert!(approx(results.vw, 50.0));
        assert!(approx(results.vh, 88.888_888_888_888_89));
    }

    #[test]
    fn test_convert_from_vh() {
        let converter = Converter::new(Viewport::new(1440.0, 900.0).unwrap());
        let results = converter.convert(10.0, ConversionUnit::Vh).unwrap();
        assert!(approx(results.px, 90.0));
        assert!(approx(results.vw, 6.25));
        assert!(approx(results.vh, 10.0));
    }

    #[test]
    fn test_zero_and_negative() {
        let converter = Converter::default();
        for unit in ConversionUnit::ALL {
            let zero = converter.convert(0.0, unit).unwrap();
            assert_eq!(zero, ConversionResults::new(0.0, 0.0, 0.0));
        }

        let negative = converter.convert(-96.0, ConversionUnit::Px).unwrap();
        assert!(negative.px < 0.0 && negative.vw < 0.0 && negative.vh < 0.0);
        assert!(approx(negative.vw, -5.0));
    }

    #[test]
    fn test_source_unit_is_preserved() {
        let converter = Converter::new(Viewport::new(1366.0, 768.0).unwrap());
        for unit in ConversionUnit::ALL {
            for value in [0.5, 13.0, 333.3, -42.0] {
                let results = converter.convert(value, unit).unwrap();
                assert!(approx(results.get(unit), value), "{} {}", value, unit);
            }
        }
    }

    #[test]
    fn test_convert_to() {
        let converter = Converter::default();
        let px = converter
            .convert_to(25.0, ConversionUnit::Vw, ConversionUnit::Px)
            .unwrap();
        assert!(approx(px, 480.0));

        let measurement = Measurement::new(100.0, ConversionUnit::Vh);
        let results = converter.convert_measurement(&measurement).unwrap();
        assert!(approx(results.px, 1080.0));
    }

    #[test]
    fn test_rejects_non_finite_input() {
        let converter = Converter::default();
        assert!(matches!(
            converter.convert(f64::NAN, ConversionUnit::Px),
            Err(ConvertError::NonFiniteValue(_))
        ));
        assert!(matches!(
            converter.convert(f64::INFINITY, ConversionUnit::Vw),
            Err(ConvertError::NonFiniteValue(_))
        ));
    }

    #[test]
    fn test_rejects_overflowing_results() {
        let converter = Converter::default();
        assert!(matches!(
            converter.convert(1e307, ConversionUnit::Vw),
            Err(ConvertError::NonFiniteValue(v)) if v.is_infinite()
        ));
        assert!(matches!(
            converter.convert_to(-1e307, ConversionUnit::Vh, ConversionUnit::Px),
            Err(ConvertError::NonFiniteValue(_))
        ));

        let results = converter.convert(1e300, ConversionUnit::Px).unwrap();
        assert!(results.vw.is_finite() && results.vh.is_finite());
    }
}
