use std::error::Error;

use plotters::prelude::*;

use super::Series;

const FIT_COLORS: [RGBColor; 5] = [RED, GREEN, BLUE, MAGENTA, CYAN];

/// Plot the samples as dots and every fitted line on top of them
///
/// # Arguments:
/// samples: the observed (x, target) pairs
/// fits: a label and the predicted (x, target) pairs for each estimator
pub fn plot(
    samples: &Series,
    fits: &[(String, Series)],
    filename: &str,
    dims: (u32, u32),
) -> Result<(), Box<dyn Error>> {
    info!("n_samples: {}, n_fits: {}", samples.len(), fits.len());

    let ((x_min, x_max), (y_min, y_max)) =
        bounds(samples.iter().chain(fits.iter().flat_map(|(_, s)| s.iter())))
            .ok_or("nothing to plot")?;
    info!("x: [{}, {}], y: [{}, {}]", x_min, x_max, y_min, y_max);

    let root_area = BitMapBackend::new(filename, dims).into_drawing_area();
    root_area.fill(&WHITE)?;
    let root_area = root_area.titled(filename, ("sans-serif", 20).into_font())?;

    let mut cc0 = ChartBuilder::on(&root_area)
        .margin(5)
        .set_all_label_area_size(50)
        .caption("fits", ("sans-serif", 30).into_font().with_color(BLACK))
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;
    cc0.configure_mesh()
        .x_labels(20)
        .y_labels(20)
        .x_label_formatter(&|v| format!("{:.2}", v))
        .y_label_formatter(&|v| format!("{:.2}", v))
        .draw()?;

    cc0.draw_series(samples.iter().map(|(x, y)| Circle::new((*x, *y), 3, BLACK.filled())))?
        .label("samples")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, BLACK.filled()));
    for (i, (label, series)) in fits.iter().enumerate() {
        let color = FIT_COLORS[i % FIT_COLORS.len()];
        cc0.draw_series(LineSeries::new(series.clone(), color))?
            .label(label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }
    cc0.configure_series_labels().border_style(BLACK).draw()?;

    root_area.present()?;
    info!("successfully plotted to {}", filename);

    Ok(())
}

/// The x and y ranges covering all points, widened where they would be empty
fn bounds<'a, I>(points: I) -> Option<((f64, f64), (f64, f64))>
where
    I: Iterator<Item = &'a (f64, f64)>,
{
    let mut res: Option<((f64, f64), (f64, f64))> = None;
    for (x, y) in points.filter(|(x, y)| x.is_finite() && y.is_finite()) {
        res = Some(match res {
            None => ((*x, *x), (*y, *y)),
            Some(((x_min, x_max), (y_min, y_max))) => {
                ((x_min.min(*x), x_max.max(*x)), (y_min.min(*y), y_max.max(*y)))
            }
        });
    }

    res.map(|(xs, ys)| (widen(xs), widen(ys)))
}

fn widen((min, max): (f64, f64)) -> (f64, f64) {
    if min == max {
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_points() {
        let points: Series = vec![(0.0, 1.0), (2.0, -3.0), (1.0, 5.0), (f64::NAN, 100.0)];

        assert_eq!(bounds(points.iter()), Some(((0.0, 2.0), (-3.0, 5.0))));
    }

    #[test]
    fn bounds_of_single_point() {
        let points: Series = vec![(1.0, 1.0)];

        assert_eq!(bounds(points.iter()), Some(((0.0, 2.0), (0.0, 2.0))));
        assert_eq!(bounds(Series::new().iter()), None);
    }
}
