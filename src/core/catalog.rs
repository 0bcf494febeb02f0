use crate::error::Result;
use crate::models::{CosmeticProduct, Feature, SkinType};
use crate::services::{Row, TabularDataset};

pub const NAME_COLUMN: &str = "Name";
pub const BRAND_COLUMN: &str = "Brand";
pub const PRICE_COLUMN: &str = "Price";
pub const RANK_COLUMN: &str = "Rank";
pub const LABEL_COLUMN: &str = "Label";

/// Typed product records in catalog order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    products: Vec<CosmeticProduct>,
}

impl ProductCatalog {
    pub fn new(products: Vec<CosmeticProduct>) -> Self {
        Self { products }
    }

    /// Build one product per dataset row, keeping row order
    pub fn from_dataset(dataset: &TabularDataset) -> Result<Self> {
        let products = dataset
            .rows()
            .iter()
            .map(parse_product)
            .collect::<Result<Vec<_>>>()?;

        tracing::info!("Product catalog built with {} products", products.len());

        Ok(Self::new(products))
    }

    pub fn products(&self) -> &[CosmeticProduct] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CosmeticProduct> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a ProductCatalog {
    type Item = &'a CosmeticProduct;
    type IntoIter = std::slice::Iter<'a, CosmeticProduct>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parse a catalog row into a product
pub fn parse_product(row: &Row) -> Result<CosmeticProduct> {
    let name = row.text(NAME_COLUMN)?;
    let brand = row.text(BRAND_COLUMN)?;
    let price = row.number(PRICE_COLUMN)?;
    let rank = row.number(RANK_COLUMN)?;
    let label = row.optional(LABEL_COLUMN).map(str::to_string);

    let mut skin_types = Vec::with_capacity(SkinType::ALL.len());
    for skin_type in SkinType::ALL {
        if row.flag(skin_type.catalog_column())? {
            skin_types.push(skin_type);
        }
    }

    let mut features = Vec::with_capacity(Feature::ALL.len());
    for feature in Feature::ALL {
        if row.flag(feature.name())? {
            features.push(feature);
        }
    }

    Ok(CosmeticProduct {
        name,
        brand,
        label,
        price,
        rank,
        skin_types,
        features,
    })
}
