//! Wishlist flow tests: default provisioning, duplicates, ownership

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::product::Product;
use crate::errors::{CatalogError, DomainError, WishlistError};
use crate::repositories::product::MockProductRepository;
use crate::repositories::wishlist::MockWishlistRepository;
use crate::services::wishlist::{AddToWishlist, WishlistService};

type TestWishlistService = WishlistService<MockWishlistRepository, MockProductRepository>;

struct Fixture {
    service: TestWishlistService,
    user_id: Uuid,
    product: Product,
}

async fn setup() -> Fixture {
    let wishlists = Arc::new(MockWishlistRepository::new());
    let products = Arc::new(MockProductRepository::new());

    let product = Product::new("Mouse".to_string(), "MOU-1".to_string(), 2_500);
    products.put(product.clone()).await;

    Fixture {
        service: WishlistService::new(wishlists, products),
        user_id: Uuid::new_v4(),
        product,
    }
}

#[tokio::test]
async fn test_default_wishlist_is_provisioned_once() {
    let fixture = setup().await;

    let first = fixture.service.get_default(fixture.user_id).await.unwrap();
    let second = fixture.service.get_default(fixture.user_id).await.unwrap();

    assert_eq!(first.id, second.id);
    assert!(first.is_default);
}

#[tokio::test]
async fn test_add_without_list_id_targets_the_default() {
    let fixture = setup().await;

    let item = fixture
        .service
        .add_item(
            fixture.user_id,
            AddToWishlist {
                wishlist_id: None,
                product_id: fixture.product.id,
                variant_id: None,
            },
        )
        .await
        .unwrap();

    let default = fixture.service.get_default(fixture.user_id).await.unwrap();
    assert_eq!(item.wishlist_id, default.id);
}

#[tokio::test]
async fn test_duplicate_item_is_rejected() {
    let fixture = setup().await;

    let add = AddToWishlist {
        wishlist_id: None,
        product_id: fixture.product.id,
        variant_id: None,
    };
    fixture
        .service
        .add_item(fixture.user_id, add.clone())
        .await
        .unwrap();

    let result = fixture.service.add_item(fixture.user_id, add).await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Wishlist(WishlistError::DuplicateItem)
    ));
}

#[tokio::test]
async fn test_add_unknown_product_is_rejected() {
    let fixture = setup().await;

    let result = fixture
        .service
        .add_item(
            fixture.user_id,
            AddToWishlist {
                wishlist_id: None,
                product_id: Uuid::new_v4(),
                variant_id: None,
            },
        )
        .await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Catalog(CatalogError::ProductNotFound { .. })
    ));
}

#[tokio::test]
async fn test_foreign_wishlist_behaves_like_missing() {
    let fixture = setup().await;

    let other_user = Uuid::new_v4();
    let foreign = fixture
        .service
        .create(other_user, "Holiday".to_string())
        .await
        .unwrap();

    let result = fixture.service.find_one(foreign.id, fixture.user_id).await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Wishlist(WishlistError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_move_item_between_lists() {
    let fixture = setup().await;

    let item = fixture
        .service
        .add_item(
            fixture.user_id,
            AddToWishlist {
                wishlist_id: None,
                product_id: fixture.product.id,
                variant_id: None,
            },
        )
        .await
        .unwrap();

    let target = fixture
        .service
        .create(fixture.user_id, "Gifts".to_string())
        .await
        .unwrap();

    let moved = fixture
        .service
        .move_item(fixture.user_id, item.id, target.id)
        .await
        .unwrap();

    assert_eq!(moved.wishlist_id, target.id);

    let default = fixture.service.get_default(fixture.user_id).await.unwrap();
    let default_items = fixture
        .service
        .find_items(default.id, fixture.user_id)
        .await
        .unwrap();
    assert!(default_items.is_empty());
}

#[tokio::test]
async fn test_remove_and_clear() {
    let fixture = setup().await;

    let item = fixture
        .service
        .add_item(
            fixture.user_id,
            AddToWishlist {
                wishlist_id: None,
                product_id: fixture.product.id,
                variant_id: None,
            },
        )
        .await
        .unwrap();

    fixture
        .service
        .remove_item(fixture.user_id, item.id)
        .await
        .unwrap();

    let result = fixture.service.remove_item(fixture.user_id, item.id).await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Wishlist(WishlistError::ItemNotFound { .. })
    ));

    let default = fixture.service.get_default(fixture.user_id).await.unwrap();
    fixture
        .service
        .add_item(
            fixture.user_id,
            AddToWishlist {
                wishlist_id: Some(default.id),
                product_id: fixture.product.id,
                variant_id: None,
            },
        )
        .await
        .unwrap();

    let cleared = fixture
        .service
        .clear(default.id, fixture.user_id)
        .await
        .unwrap();
    assert_eq!(cleared, 1);
}
