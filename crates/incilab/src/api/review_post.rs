//! Review post endpoints: articles, likes, and comments
//!
//! Listing endpoints accept the current user's id so the server can mark
//! which posts that user has already liked.

use serde::Serialize;

use incilab_common::{Envelope, Error};
use incilab_http_client::RequestDescriptor;

use crate::client::ApiClient;

impl ApiClient {
    /// Review post details.
    pub async fn review_post_detail(
        &self,
        id: u64,
        user_id: Option<u64>,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(RequestDescriptor::get(format!("/review-post/{id}")).query_opt("userId", user_id))
            .await
    }

    /// Paged review post list.
    pub async fn review_post_list(
        &self,
        page: u32,
        size: u32,
        user_id: Option<u64>,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::get("/review-post/list")
                    .query("page", page)
                    .query("size", size)
                    .query_opt("userId", user_id),
            )
            .await
    }

    /// Paged review posts carrying a tag.
    pub async fn review_posts_by_tag(
        &self,
        tag: &str,
        page: u32,
        size: u32,
        user_id: Option<u64>,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::get(format!("/review-post/tag/{tag}"))
                    .query("page", page)
                    .query("size", size)
                    .query_opt("userId", user_id),
            )
            .await
    }

    /// Search review posts by keyword.
    pub async fn search_review_posts(
        &self,
        keyword: &str,
        page: u32,
        size: u32,
        user_id: Option<u64>,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::get("/review-post/search")
                    .query("keyword", keyword)
                    .query("page", page)
                    .query("size", size)
                    .query_opt("userId", user_id),
            )
            .await
    }

    /// Most popular review posts.
    pub async fn hot_review_posts(
        &self,
        limit: u32,
        user_id: Option<u64>,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::get("/review-post/hot")
                    .query("limit", limit)
                    .query_opt("userId", user_id),
            )
            .await
    }

    /// Review posts published by a user.
    pub async fn review_posts_by_user(&self, user_id: u64) -> Result<Envelope, Error> {
        self.http()
            .get(&format!("/review-post/user/{user_id}"), &[])
            .await
    }

    /// Review posts about a product.
    pub async fn review_posts_by_product(
        &self,
        product_id: u64,
        user_id: Option<u64>,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::get(format!("/review-post/product/{product_id}"))
                    .query_opt("userId", user_id),
            )
            .await
    }

    /// Publish a review post.
    pub async fn add_review_post<B: Serialize + ?Sized>(&self, post: &B) -> Result<Envelope, Error> {
        self.http().post("/review-post/add", post).await
    }

    /// Update a review post.
    pub async fn update_review_post<B: Serialize + ?Sized>(
        &self,
        post: &B,
    ) -> Result<Envelope, Error> {
        self.http().put("/review-post/update", post).await
    }

    /// Delete a review post.
    pub async fn delete_review_post(&self, id: u64, user_id: u64) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::delete(format!("/review-post/delete/{id}"))
                    .query("userId", user_id),
            )
            .await
    }

    /// Like a review post.
    pub async fn like_review_post(&self, id: u64, user_id: u64) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::post(format!("/review-post/like/{id}")).query("userId", user_id),
            )
            .await
    }

    /// Withdraw a like.
    pub async fn unlike_review_post(&self, id: u64, user_id: u64) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::delete(format!("/review-post/unlike/{id}"))
                    .query("userId", user_id),
            )
            .await
    }

    /// Whether a user has liked a review post.
    pub async fn check_review_post_liked(
        &self,
        review_post_id: u64,
        user_id: u64,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::get("/review-post/check-like")
                    .query("reviewPostId", review_post_id)
                    .query("userId", user_id),
            )
            .await
    }

    /// All comments of a review post.
    pub async fn review_comments(&self, review_post_id: u64) -> Result<Envelope, Error> {
        self.http()
            .get(&format!("/review-post/{review_post_id}/comments"), &[])
            .await
    }

    /// Paged comments of a review post.
    pub async fn review_comments_page(
        &self,
        review_post_id: u64,
        page: u32,
        size: u32,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::get(format!("/review-post/{review_post_id}/comments/page"))
                    .query("page", page)
                    .query("size", size),
            )
            .await
    }

    /// Post a comment.
    pub async fn add_review_comment<B: Serialize + ?Sized>(
        &self,
        comment: &B,
    ) -> Result<Envelope, Error> {
        self.http().post("/review-comment/add", comment).await
    }

    /// Update a comment.
    pub async fn update_review_comment<B: Serialize + ?Sized>(
        &self,
        comment: &B,
    ) -> Result<Envelope, Error> {
        self.http().put("/review-comment/update", comment).await
    }

    /// Delete a comment.
    pub async fn delete_review_comment(&self, id: u64, user_id: u64) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::delete(format!("/review-comment/delete/{id}"))
                    .query("userId", user_id),
            )
            .await
    }

    /// Replies to a comment.
    pub async fn review_comment_replies(&self, parent_id: u64) -> Result<Envelope, Error> {
        self.http()
            .get(&format!("/review-comment/replies/{parent_id}"), &[])
            .await
    }
}
