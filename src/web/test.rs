use poem::test::TestClient;
use poem::Endpoint;

use crate::catalog::Catalog;
use crate::predictor::Predictor;
use crate::prelude::*;
use crate::web::create_app;

pub const LOCATIONS: &str = "\
city,type,name
Metropolis,park,Central Park
Metropolis,beach,Sunny Beach
";

/// Predicted hour when the form does not specify one.
pub const CLOCK_HOUR: u32 = 21;

fn clock() -> u32 {
    CLOCK_HOUR
}

pub fn create_test_client() -> Result<TestClient<impl Endpoint>> {
    let predictor = Predictor::fit()?.with_clock(clock);
    let catalog = Catalog::from_reader(LOCATIONS.as_bytes())?;
    Ok(TestClient::new(create_app(predictor, Arc::new(catalog))))
}
