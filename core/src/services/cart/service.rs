//! Shopping cart service

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::entities::cart::{Cart, CartItem};
use crate::domain::entities::product::{Product, ProductVariant};
use crate::domain::value_objects::{CartLine, CartView};
use crate::errors::{CartError, CatalogError, DomainError, DomainResult, ValidationError};
use crate::repositories::{CartRepository, ProductRepository};

/// Fields for adding a line to a cart
#[derive(Debug, Clone)]
pub struct AddToCart {
    /// Product to add
    pub product_id: Uuid,
    /// Optional variant of the product
    pub variant_id: Option<Uuid>,
    /// Number of units, must be positive
    pub quantity: u32,
}

/// Service managing shopping carts
///
/// Stock is checked against the variant when a line targets one, else
/// against the product. Lines are keyed by (product, variant): adding the
/// same pairing merges quantities.
pub struct CartService<C, P>
where
    C: CartRepository,
    P: ProductRepository,
{
    carts: Arc<C>,
    products: Arc<P>,
}

impl<C, P> CartService<C, P>
where
    C: CartRepository,
    P: ProductRepository,
{
    /// Creates a new cart service
    pub fn new(carts: Arc<C>, products: Arc<P>) -> Self {
        Self { carts, products }
    }

    /// Returns the user's cart, creating it on first use
    pub async fn get_or_create_cart(&self, user_id: Uuid) -> DomainResult<CartView> {
        let cart = match self.carts.find_by_user_id(user_id).await? {
            Some(cart) => cart,
            None => {
                let cart = self.carts.create(Cart::for_user(user_id)).await?;
                info!(cart_id = %cart.id, user_id = %user_id, "created cart");
                cart
            }
        };

        self.view(cart).await
    }

    /// Creates an anonymous guest cart
    pub async fn create_guest_cart(&self) -> DomainResult<CartView> {
        let cart = self.carts.create(Cart::guest()).await?;
        info!(cart_id = %cart.id, "created guest cart");
        self.view(cart).await
    }

    /// Returns a cart by id
    pub async fn get_cart(&self, cart_id: Uuid) -> DomainResult<CartView> {
        let cart = self.require_cart(cart_id).await?;
        self.view(cart).await
    }

    /// Adds units of a product (or a variant) to a cart
    ///
    /// An existing (product, variant) line is topped up instead of
    /// duplicated; the merged quantity must fit the available stock.
    pub async fn add_item(&self, cart_id: Uuid, input: AddToCart) -> DomainResult<CartView> {
        if input.quantity == 0 {
            return Err(DomainError::ValidationErr(ValidationError::NotPositive {
                field: "quantity".to_string(),
            }));
        }

        let cart = self.require_cart(cart_id).await?;

        let product = self
            .products
            .find_by_id(input.product_id)
            .await?
            .ok_or(DomainError::Catalog(CatalogError::ProductNotFound {
                id: input.product_id,
            }))?;

        let variant = match input.variant_id {
            Some(variant_id) => Some(self.require_variant(&product, variant_id).await?),
            None => None,
        };

        let existing = self
            .carts
            .find_item_by_product(cart.id, input.product_id, input.variant_id)
            .await?;

        let merged_quantity = existing
            .as_ref()
            .map(|item| item.quantity)
            .unwrap_or(0)
            + input.quantity;

        let available = variant
            .as_ref()
            .map(|v| v.quantity)
            .unwrap_or(product.quantity);
        if merged_quantity > available {
            return Err(DomainError::Catalog(CatalogError::InsufficientStock {
                available,
            }));
        }

        match existing {
            Some(mut item) => {
                item.add_quantity(input.quantity);
                self.carts.save_item(item).await?;
            }
            None => {
                let item =
                    CartItem::new(cart.id, input.product_id, input.variant_id, input.quantity);
                self.carts.save_item(item).await?;
            }
        }

        info!(cart_id = %cart.id, product_id = %input.product_id, "added item to cart");

        self.view(cart).await
    }

    /// Replaces the quantity of a cart line
    pub async fn update_item(
        &self,
        cart_id: Uuid,
        item_id: Uuid,
        quantity: u32,
    ) -> DomainResult<CartView> {
        if quantity == 0 {
            return Err(DomainError::ValidationErr(ValidationError::NotPositive {
                field: "quantity".to_string(),
            }));
        }

        let cart = self.require_cart(cart_id).await?;
        let mut item = self.require_item(cart.id, item_id).await?;

        let product = self
            .products
            .find_by_id(item.product_id)
            .await?
            .ok_or(DomainError::Catalog(CatalogError::ProductNotFound {
                id: item.product_id,
            }))?;

        let available = match item.variant_id {
            Some(variant_id) => self.require_variant(&product, variant_id).await?.quantity,
            None => product.quantity,
        };
        if quantity > available {
            return Err(DomainError::Catalog(CatalogError::InsufficientStock {
                available,
            }));
        }

        item.set_quantity(quantity);
        self.carts.save_item(item).await?;

        self.view(cart).await
    }

    /// Removes a line from a cart
    pub async fn remove_item(&self, cart_id: Uuid, item_id: Uuid) -> DomainResult<CartView> {
        let cart = self.require_cart(cart_id).await?;
        let item = self.require_item(cart.id, item_id).await?;

        self.carts.delete_item(item.id).await?;
        info!(cart_id = %cart.id, item_id = %item.id, "removed cart item");

        self.view(cart).await
    }

    /// Empties a cart
    pub async fn clear(&self, cart_id: Uuid) -> DomainResult<CartView> {
        let cart = self.require_cart(cart_id).await?;

        let removed = self.carts.clear_items(cart.id).await?;
        info!(cart_id = %cart.id, removed, "cleared cart");

        self.view(cart).await
    }

    /// Folds a guest cart into the user's cart and deletes the guest cart
    pub async fn merge_guest_cart(
        &self,
        guest_cart_id: Uuid,
        user_id: Uuid,
    ) -> DomainResult<CartView> {
        let guest_cart = self.require_cart(guest_cart_id).await?;

        let target = match self.carts.find_by_user_id(user_id).await? {
            Some(cart) => cart,
            None => self.carts.create(Cart::for_user(user_id)).await?,
        };

        for guest_item in self.carts.find_items(guest_cart.id).await? {
            let existing = self
                .carts
                .find_item_by_product(target.id, guest_item.product_id, guest_item.variant_id)
                .await?;

            match existing {
                Some(mut item) => {
                    item.add_quantity(guest_item.quantity);
                    self.carts.save_item(item).await?;
                }
                None => {
                    let item = CartItem::new(
                        target.id,
                        guest_item.product_id,
                        guest_item.variant_id,
                        guest_item.quantity,
                    );
                    self.carts.save_item(item).await?;
                }
            }
        }

        self.carts.delete(guest_cart.id).await?;
        info!(guest_cart_id = %guest_cart.id, user_id = %user_id, "merged guest cart");

        self.view(target).await
    }

    async fn require_cart(&self, cart_id: Uuid) -> DomainResult<Cart> {
        self.carts
            .find_by_id(cart_id)
            .await?
            .ok_or(DomainError::Cart(CartError::CartNotFound { id: cart_id }))
    }

    async fn require_item(&self, cart_id: Uuid, item_id: Uuid) -> DomainResult<CartItem> {
        let item = self
            .carts
            .find_item(item_id)
            .await?
            .filter(|item| item.cart_id == cart_id)
            .ok_or(DomainError::Cart(CartError::ItemNotFound { id: item_id }))?;
        Ok(item)
    }

    async fn require_variant(
        &self,
        product: &Product,
        variant_id: Uuid,
    ) -> DomainResult<ProductVariant> {
        self.products
            .find_variant(variant_id)
            .await?
            .filter(|variant| variant.product_id == product.id)
            .ok_or(DomainError::Catalog(CatalogError::VariantNotFound {
                id: variant_id,
            }))
    }

    /// Prices the cart's lines against the current catalog
    ///
    /// Lines whose product has vanished from the catalog are dropped from
    /// the view rather than failing the whole cart.
    async fn view(&self, cart: Cart) -> DomainResult<CartView> {
        let items = self.carts.find_items(cart.id).await?;
        let mut lines = Vec::with_capacity(items.len());

        for item in items {
            let Some(product) = self.products.find_by_id(item.product_id).await? else {
                debug!(item_id = %item.id, "skipping cart line for vanished product");
                continue;
            };

            let variant = match item.variant_id {
                Some(variant_id) => self.products.find_variant(variant_id).await?,
                None => None,
            };

            let unit_price = variant
                .as_ref()
                .map(ProductVariant::effective_price)
                .unwrap_or_else(|| product.effective_price());

            lines.push(CartLine {
                line_total: unit_price * item.quantity as i64,
                product_name: product.name,
                variant_name: variant.map(|v| v.name),
                unit_price,
                item,
            });
        }

        Ok(CartView::new(cart, lines))
    }
}
