use crate::Series;

/// Collects the samples and the fitted lines of several estimators before plotting
#[derive(Debug, Clone, Default)]
pub struct PlotGather {
    samples: Series,
    fits: Vec<(String, Series)>,
}

impl PlotGather {
    #[inline(always)]
    pub fn push_sample(&mut self, x: f64, y: f64) {
        self.samples.push((x, y))
    }

    /// Append a point to the fit called `label`, starting a new fit if there is none yet
    pub fn push_fit(&mut self, label: &str, x: f64, y: f64) {
        match self.fits.iter_mut().find(|(l, _)| l == label) {
            Some((_, series)) => series.push((x, y)),
            None => self.fits.push((label.to_string(), vec![(x, y)])),
        }
    }

    #[inline(always)]
    pub fn samples(&self) -> &Series {
        &self.samples
    }

    #[inline(always)]
    pub fn fits(&self) -> &[(String, Series)] {
        &self.fits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gathers_fits_by_label() {
        let mut p = PlotGather::default();
        p.push_sample(0.0, 1.0);
        p.push_fit("LS", 0.0, 0.9);
        p.push_fit("RR", 0.0, 1.0);
        p.push_fit("LS", 1.0, 2.9);

        assert_eq!(p.samples(), &vec![(0.0, 1.0)]);
        assert_eq!(p.fits().len(), 2);
        assert_eq!(p.fits()[0], ("LS".to_string(), vec![(0.0, 0.9), (1.0, 2.9)]));
        assert_eq!(p.fits()[1], ("RR".to_string(), vec![(0.0, 1.0)]));
    }
}
