//! Nearest transit stop port

use async_trait::async_trait;
use domain::{GeoLocation, TransitStop};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for nearest-stop lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StopFinderPort: Send + Sync {
    /// Find the transit stop closest to `location`
    ///
    /// `Ok(None)` means the service answered but has no stop nearby;
    /// that is not an error.
    async fn nearest_stop(
        &self,
        location: &GeoLocation,
    ) -> Result<Option<TransitStop>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn StopFinderPort>();
    }

    #[tokio::test]
    async fn mock_can_report_no_stop() {
        let mut mock = MockStopFinderPort::new();
        mock.expect_nearest_stop().returning(|_| Ok(None));

        let location = GeoLocation::new(0.0, 0.0).unwrap();
        assert!(mock.nearest_stop(&location).await.unwrap().is_none());
    }
}
