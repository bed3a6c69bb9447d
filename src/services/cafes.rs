use crate::error::ApiResult;
use crate::http_client::HttpClient;
use crate::models::{AverageRating, Cafe, CafeCreate, CafeWithRating, CafeWithReviews, Review, ReviewCreate};
use crate::storage::PublicUrlRewriter;

/// Bucket holding cafe images on the external object store.
const CAFE_IMAGES_BUCKET: &str = "Cafe Images";

/// Typed client for the cafe and cafe-review endpoints.
///
/// Image URLs in responses may be time-limited signed URLs; every read path
/// rewrites them to their stable public form before handing them out.
#[derive(Clone)]
pub struct CafesClient {
    http: HttpClient,
    rewriter: PublicUrlRewriter,
}

impl CafesClient {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            rewriter: PublicUrlRewriter::new(CAFE_IMAGES_BUCKET),
        }
    }

    pub async fn list(&self) -> ApiResult<Vec<Cafe>> {
        let cafes: Vec<Cafe> = self
            .http
            .get_json("/cafes/")
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch cafes: {}", e))?;
        Ok(cafes
            .into_iter()
            .map(|mut cafe| {
                cafe.image_url = self.rewriter.rewrite(cafe.image_url.take());
                cafe
            })
            .collect())
    }

    pub async fn get(&self, cafe_id: i64) -> ApiResult<CafeWithReviews> {
        let mut cafe: CafeWithReviews = self
            .http
            .get_json(&format!("/cafes/{}", cafe_id))
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch cafe {}: {}", cafe_id, e))?;
        cafe.image_url = self.rewriter.rewrite(cafe.image_url.take());
        Ok(cafe)
    }

    /// Listing-page rows with pre-aggregated ratings.
    pub async fn list_with_ratings(&self) -> ApiResult<Vec<CafeWithRating>> {
        let cafes: Vec<CafeWithRating> = self
            .http
            .get_json("/cafes/with-reviews")
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch cafes with ratings: {}", e))?;
        Ok(cafes
            .into_iter()
            .map(|mut cafe| {
                cafe.image_url = self.rewriter.rewrite(cafe.image_url.take());
                cafe
            })
            .collect())
    }

    pub async fn average_rating(&self, cafe_id: i64) -> ApiResult<AverageRating> {
        self.http
            .get_json(&format!("/cafes/{}/average-rating", cafe_id))
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch rating for cafe {}: {}", cafe_id, e))
    }

    pub async fn create(&self, cafe: &CafeCreate) -> ApiResult<Cafe> {
        let mut created: Cafe = self
            .http
            .post_json("/cafes/", cafe)
            .await
            .inspect_err(|e| tracing::error!("Cafe creation failed: {}", e))?;
        created.image_url = self.rewriter.rewrite(created.image_url.take());
        Ok(created)
    }

    pub async fn create_review(&self, cafe_id: i64, review: &ReviewCreate) -> ApiResult<Review> {
        self.http
            .post_json(&format!("/cafes/{}/reviews", cafe_id), review)
            .await
            .inspect_err(|e| tracing::error!("Failed to review cafe {}: {}", cafe_id, e))
    }

    pub async fn delete_review(&self, review_id: i64) -> ApiResult<()> {
        self.http
            .delete(&format!("/cafes/reviews/{}", review_id))
            .await
            .inspect_err(|e| tracing::error!("Failed to delete review {}: {}", review_id, e))
    }
}
