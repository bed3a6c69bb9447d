use crate::error::ApiResult;
use crate::http_client::HttpClient;
use crate::models::{
    Society, SocietyCreate, SocietyReview, SocietyReviewCreate, SocietyReviewUpdate,
    SocietyUpdate, SocietyWithRating, SocietyWithReviews,
};
use crate::storage::PublicUrlRewriter;

/// Bucket holding society images on the external object store.
const SOCIETY_IMAGES_BUCKET: &str = "Society Images";

/// Typed client for the society and society-review endpoints.
///
/// Like cafes, society image URLs may arrive as signed URLs and are rewritten
/// to their public form on every read.
#[derive(Clone)]
pub struct SocietiesClient {
    http: HttpClient,
    rewriter: PublicUrlRewriter,
}

impl SocietiesClient {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            rewriter: PublicUrlRewriter::new(SOCIETY_IMAGES_BUCKET),
        }
    }

    pub async fn list(&self) -> ApiResult<Vec<Society>> {
        let societies: Vec<Society> = self
            .http
            .get_json("/societies/")
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch societies: {}", e))?;
        Ok(societies
            .into_iter()
            .map(|mut society| {
                society.image_url = self.rewriter.rewrite(society.image_url.take());
                society
            })
            .collect())
    }

    pub async fn get(&self, society_id: i64) -> ApiResult<SocietyWithReviews> {
        let mut society: SocietyWithReviews = self
            .http
            .get_json(&format!("/societies/{}", society_id))
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch society {}: {}", society_id, e))?;
        society.image_url = self.rewriter.rewrite(society.image_url.take());
        Ok(society)
    }

    /// Listing-page rows with pre-aggregated ratings.
    pub async fn list_with_ratings(&self) -> ApiResult<Vec<SocietyWithRating>> {
        let societies: Vec<SocietyWithRating> = self
            .http
            .get_json("/societies/with-reviews")
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch societies with ratings: {}", e))?;
        Ok(societies
            .into_iter()
            .map(|mut society| {
                society.image_url = self.rewriter.rewrite(society.image_url.take());
                society
            })
            .collect())
    }

    pub async fn create(&self, society: &SocietyCreate) -> ApiResult<Society> {
        let mut created: Society = self
            .http
            .post_json("/societies/", society)
            .await
            .inspect_err(|e| tracing::error!("Society creation failed: {}", e))?;
        created.image_url = self.rewriter.rewrite(created.image_url.take());
        Ok(created)
    }

    pub async fn update(&self, society_id: i64, update: &SocietyUpdate) -> ApiResult<Society> {
        let mut updated: Society = self
            .http
            .put_json(&format!("/societies/{}", society_id), update)
            .await
            .inspect_err(|e| tracing::error!("Failed to update society {}: {}", society_id, e))?;
        updated.image_url = self.rewriter.rewrite(updated.image_url.take());
        Ok(updated)
    }

    pub async fn delete(&self, society_id: i64) -> ApiResult<()> {
        self.http
            .delete(&format!("/societies/{}", society_id))
            .await
            .inspect_err(|e| tracing::error!("Failed to delete society {}: {}", society_id, e))
    }

    pub async fn create_review(&self, review: &SocietyReviewCreate) -> ApiResult<SocietyReview> {
        self.http
            .post_json("/societies/reviews", review)
            .await
            .inspect_err(|e| {
                tracing::error!("Failed to review society {}: {}", review.society_id, e)
            })
    }

    pub async fn reviews(&self, society_id: i64) -> ApiResult<Vec<SocietyReview>> {
        self.http
            .get_json(&format!("/societies/reviews/{}", society_id))
            .await
            .inspect_err(|e| {
                tracing::error!("Failed to fetch reviews for society {}: {}", society_id, e)
            })
    }

    pub async fn update_review(
        &self,
        review_id: i64,
        update: &SocietyReviewUpdate,
    ) -> ApiResult<SocietyReview> {
        self.http
            .put_json(&format!("/societies/reviews/{}", review_id), update)
            .await
            .inspect_err(|e| tracing::error!("Failed to update review {}: {}", review_id, e))
    }

    pub async fn delete_review(&self, review_id: i64) -> ApiResult<()> {
        self.http
            .delete(&format!("/societies/reviews/{}", review_id))
            .await
            .inspect_err(|e| tracing::error!("Failed to delete review {}: {}", review_id, e))
    }
}
