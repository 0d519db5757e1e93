//! Wishlist service

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::entities::wishlist::{Wishlist, WishlistItem};
use crate::errors::{CatalogError, DomainError, DomainResult, WishlistError};
use crate::repositories::{ProductRepository, WishlistRepository};

/// Fields for saving a product to a wishlist
#[derive(Debug, Clone)]
pub struct AddToWishlist {
    /// Target list; the user's default list when omitted
    pub wishlist_id: Option<Uuid>,
    /// Product to save
    pub product_id: Uuid,
    /// Optional variant of the product
    pub variant_id: Option<Uuid>,
}

/// Service managing per-user wishlists
///
/// Every operation is scoped to the requesting user: a wishlist owned by
/// someone else behaves exactly like a missing one. The default list is
/// provisioned lazily on first use.
pub struct WishlistService<W, P>
where
    W: WishlistRepository,
    P: ProductRepository,
{
    wishlists: Arc<W>,
    products: Arc<P>,
}

impl<W, P> WishlistService<W, P>
where
    W: WishlistRepository,
    P: ProductRepository,
{
    /// Creates a new wishlist service
    pub fn new(wishlists: Arc<W>, products: Arc<P>) -> Self {
        Self {
            wishlists,
            products,
        }
    }

    /// Creates a named wishlist for a user
    pub async fn create(&self, user_id: Uuid, name: String) -> DomainResult<Wishlist> {
        let wishlist = self.wishlists.create(Wishlist::new(user_id, name)).await?;
        info!(wishlist_id = %wishlist.id, user_id = %user_id, "created wishlist");
        Ok(wishlist)
    }

    /// Lists a user's wishlists, default list first
    pub async fn find_all(&self, user_id: Uuid) -> DomainResult<Vec<Wishlist>> {
        self.wishlists.find_by_user_id(user_id).await
    }

    /// Finds one of the user's wishlists
    pub async fn find_one(&self, id: Uuid, user_id: Uuid) -> DomainResult<Wishlist> {
        self.require_owned(id, user_id).await
    }

    /// Lists the items of one of the user's wishlists
    pub async fn find_items(&self, id: Uuid, user_id: Uuid) -> DomainResult<Vec<WishlistItem>> {
        let wishlist = self.require_owned(id, user_id).await?;
        self.wishlists.find_items(wishlist.id).await
    }

    /// Renames one of the user's wishlists
    pub async fn rename(&self, id: Uuid, user_id: Uuid, name: String) -> DomainResult<Wishlist> {
        let mut wishlist = self.require_owned(id, user_id).await?;
        wishlist.name = name;
        wishlist.updated_at = chrono::Utc::now();
        self.wishlists.update(wishlist).await
    }

    /// Deletes one of the user's wishlists together with its items
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> DomainResult<()> {
        let wishlist = self.require_owned(id, user_id).await?;
        self.wishlists.delete(wishlist.id).await?;
        info!(wishlist_id = %id, "deleted wishlist");
        Ok(())
    }

    /// Returns the user's default wishlist, creating it on first use
    pub async fn get_default(&self, user_id: Uuid) -> DomainResult<Wishlist> {
        if let Some(wishlist) = self.wishlists.find_default(user_id).await? {
            return Ok(wishlist);
        }

        let wishlist = self
            .wishlists
            .create(Wishlist::default_for_user(user_id))
            .await?;
        info!(wishlist_id = %wishlist.id, user_id = %user_id, "provisioned default wishlist");

        Ok(wishlist)
    }

    /// Saves a product to a wishlist, rejecting duplicates
    pub async fn add_item(
        &self,
        user_id: Uuid,
        input: AddToWishlist,
    ) -> DomainResult<WishlistItem> {
        let wishlist = match input.wishlist_id {
            Some(id) => self.require_owned(id, user_id).await?,
            None => self.get_default(user_id).await?,
        };

        let product = self
            .products
            .find_by_id(input.product_id)
            .await?
            .ok_or(DomainError::Catalog(CatalogError::ProductNotFound {
                id: input.product_id,
            }))?;

        if let Some(variant_id) = input.variant_id {
            let variant = self.products.find_variant(variant_id).await?;
            if variant.map(|v| v.product_id) != Some(product.id) {
                return Err(DomainError::Catalog(CatalogError::VariantNotFound {
                    id: variant_id,
                }));
            }
        }

        let items = self.wishlists.find_items(wishlist.id).await?;
        if items
            .iter()
            .any(|item| item.matches(input.product_id, input.variant_id))
        {
            return Err(DomainError::Wishlist(WishlistError::DuplicateItem));
        }

        let item = self
            .wishlists
            .save_item(WishlistItem::new(
                wishlist.id,
                input.product_id,
                input.variant_id,
            ))
            .await?;
        info!(wishlist_id = %wishlist.id, product_id = %input.product_id, "saved wishlist item");

        Ok(item)
    }

    /// Removes an item from one of the user's wishlists
    pub async fn remove_item(&self, user_id: Uuid, item_id: Uuid) -> DomainResult<()> {
        let item = self.require_item(user_id, item_id).await?;
        self.wishlists.delete_item(item.id).await?;
        Ok(())
    }

    /// Empties one of the user's wishlists
    pub async fn clear(&self, id: Uuid, user_id: Uuid) -> DomainResult<usize> {
        let wishlist = self.require_owned(id, user_id).await?;
        self.wishlists.clear_items(wishlist.id).await
    }

    /// Moves an item into another of the user's wishlists
    pub async fn move_item(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        target_wishlist_id: Uuid,
    ) -> DomainResult<WishlistItem> {
        let item = self.require_item(user_id, item_id).await?;
        let target = self.require_owned(target_wishlist_id, user_id).await?;

        let target_items = self.wishlists.find_items(target.id).await?;
        if target_items
            .iter()
            .any(|existing| existing.matches(item.product_id, item.variant_id))
        {
            return Err(DomainError::Wishlist(WishlistError::DuplicateItem));
        }

        self.wishlists.delete_item(item.id).await?;
        let moved = self
            .wishlists
            .save_item(WishlistItem::new(target.id, item.product_id, item.variant_id))
            .await?;

        Ok(moved)
    }

    async fn require_owned(&self, id: Uuid, user_id: Uuid) -> DomainResult<Wishlist> {
        self.wishlists
            .find_by_id(id)
            .await?
            .filter(|wishlist| wishlist.user_id == user_id)
            .ok_or(DomainError::Wishlist(WishlistError::NotFound { id }))
    }

    async fn require_item(&self, user_id: Uuid, item_id: Uuid) -> DomainResult<WishlistItem> {
        let item = self
            .wishlists
            .find_item(item_id)
            .await?
            .ok_or(DomainError::Wishlist(WishlistError::ItemNotFound {
                id: item_id,
            }))?;

        // Ownership flows through the containing wishlist
        self.require_owned(item.wishlist_id, user_id).await?;

        Ok(item)
    }
}
