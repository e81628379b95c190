use itertools::Itertools;

use super::{IsochroneError, IsochroneParameters, IsochroneResult};
use crate::algorithm::grid::{self, interpolator, tagger, PointGrid};
use crate::algorithm::isoband::isoband_ops;
use crate::algorithm::outlier_filter;
use crate::algorithm::sample_generator::SampleGenerator;
use crate::algorithm::triangulation::{Tin, MIN_TIN_VERTICES};
use crate::matrix::DistanceMatrixClient;
use crate::model::TimeBin;
use crate::util::geo_utils;

/// computes the isobands reachable from an origin.
///
/// stages run strictly in order and any failure aborts the run. the distance
/// matrix query is the only call leaving the process.
///
/// # Arguments
///
/// * `parameters` - origin, reach, budget, detail and band count
/// * `client` - the routing service used to measure travel times
///
/// # Returns
///
/// * the isobands along with the intermediate samples, TIN and grid
pub fn run(
    parameters: &IsochroneParameters,
    client: &dyn DistanceMatrixClient,
) -> Result<IsochroneResult, IsochroneError> {
    parameters.validate()?;
    let bins = TimeBin::create_bins(parameters.budget_seconds(), parameters.bands)?;
    log::info!(
        "computing {} isobands for ({}, {}), budget {} seconds, estimated reach {} km",
        parameters.bands,
        parameters.origin.x(),
        parameters.origin.y(),
        parameters.budget_seconds(),
        parameters.reach_km()
    );

    let generator = SampleGenerator::new(parameters.origin, parameters.reach, parameters.detail);
    let candidates = generator.generate();
    log::debug!("querying travel times for {} sample points", candidates.len());

    let entries = client.table(parameters.origin, &candidates)?;
    let samples = outlier_filter::assign_measurements(&candidates, &entries)?;
    let surviving = outlier_filter::filter_samples(&samples);
    if surviving.len() < MIN_TIN_VERTICES {
        return Err(IsochroneError::InsufficientSamples {
            found: surviving.len(),
        });
    }

    let tin = Tin::build(&surviving)?;

    let coordinates = surviving.iter().map(|s| s.coordinate).collect_vec();
    let extent = geo_utils::bounding_rect(&coordinates).ok_or_else(|| {
        IsochroneError::DegenerateGeometry(String::from("samples have no bounding box"))
    })?;
    let mut point_grid = PointGrid::new(extent, grid::cell_size(parameters.reach))?;
    tagger::tag(&mut point_grid, &tin);
    interpolator::interpolate(&mut point_grid, &tin, parameters.budget);

    let isobands = isoband_ops::generate_isobands(&point_grid, &bins)?;
    log::info!(
        "finished isochrone with {} of {} samples, {} triangles and {} grid points",
        surviving.len(),
        samples.len(),
        tin.len(),
        point_grid.len()
    );
    Ok(IsochroneResult {
        samples,
        tin,
        grid: point_grid,
        isobands,
    })
}
