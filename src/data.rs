use crate::error::FieldError;
use chrono::{Days, Months, NaiveDate, NaiveDateTime, TimeDelta};
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use mysql_async::Value;
use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;
use uuid::Uuid;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Destination table plus the CSV file that feeds it. Columns are positional.
#[derive(Debug)]
pub struct TableSchema {
    pub table_name: &'static str,
    pub file_name: &'static str,
    pub columns: &'static [&'static str],
    pub create_query: &'static str,
}

impl TableSchema {
    pub fn header(&self) -> String {
        self.columns.join(",")
    }

    /// Multi-row insert with one placeholder group per row.
    pub fn insert_query(&self, rows: usize) -> String {
        let placeholders = vec!["?"; self.columns.len()].join(", ");
        let group = format!("({placeholders})");
        format!(
            "INSERT INTO {} ({}) VALUES {}",
            self.table_name,
            self.columns.join(", "),
            vec![group.as_str(); rows].join(", ")
        )
    }
}

pub trait Data: Serialize + Sized + Send {
    fn schema() -> &'static TableSchema;
    fn id(&self) -> Uuid;
    /// Rebuilds a record from quote-stripped CSV fields in column order.
    fn from_fields(fields: &[String]) -> Result<Self, FieldError>;
    fn into_values(self) -> Vec<Value>;
}

mod format {
    use super::{DATE_FORMAT, DATETIME_FORMAT};
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::Serializer;
    use std::fmt::Display;

    pub fn date<S: Serializer>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(DATE_FORMAT))
    }

    pub fn datetime<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(DATETIME_FORMAT))
    }

    pub fn display<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }
}

fn parse_uuid(column: &'static str, value: &str) -> Result<Uuid, FieldError> {
    Uuid::parse_str(value).map_err(|e| FieldError::new(column, value, e))
}

fn parse_date(column: &'static str, value: &str) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| FieldError::new(column, value, e))
}

fn parse_datetime(column: &'static str, value: &str) -> Result<NaiveDateTime, FieldError> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
        .map_err(|e| FieldError::new(column, value, e))
}

/// Removes characters that would break the naive comma split on the way back in.
pub fn sanitize_field(field: &str) -> String {
    field
        .chars()
        .filter(|c| !matches!(c, ',' | '"' | '\n' | '\r'))
        .collect()
}

pub fn random_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.random()).into_uuid()
}

/// A timestamp within the last 365 days, keeping the time of day of `now`.
fn created_within_year<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime) -> NaiveDateTime {
    now - TimeDelta::days(rng.random_range(0..365))
}

static CUSTOMERS: TableSchema = TableSchema {
    table_name: "Customers",
    file_name: "_customers.csv",
    columns: &["ID", "Name", "DateOfBirth", "CreatedAt"],
    create_query: r"CREATE TABLE IF NOT EXISTS Customers (
        ID CHAR(36) NOT NULL PRIMARY KEY,
        Name VARCHAR(255) NOT NULL,
        DateOfBirth DATE NOT NULL,
        CreatedAt DATETIME NOT NULL
        );",
};

static PRODUCTS: TableSchema = TableSchema {
    table_name: "Products",
    file_name: "_products.csv",
    columns: &["ID", "ProductName", "Price", "CreatedAt"],
    create_query: r"CREATE TABLE IF NOT EXISTS Products (
        ID CHAR(36) NOT NULL PRIMARY KEY,
        ProductName VARCHAR(255) NOT NULL,
        Price DECIMAL(19, 2) NOT NULL,
        CreatedAt DATETIME NOT NULL
        );",
};

static ORDERS: TableSchema = TableSchema {
    table_name: "Orders",
    file_name: "_orders.csv",
    columns: &["ID", "CustomerId", "CreatedAt"],
    create_query: r"CREATE TABLE IF NOT EXISTS Orders (
        ID CHAR(36) NOT NULL PRIMARY KEY,
        CustomerId CHAR(36) NOT NULL,
        CreatedAt DATETIME NOT NULL,
        FOREIGN KEY (CustomerId) REFERENCES Customers(ID)
        );",
};

static ORDER_ITEMS: TableSchema = TableSchema {
    table_name: "OrderItems",
    file_name: "_orderItems.csv",
    columns: &["ID", "OrderId", "ProductId", "Quantity"],
    create_query: r"CREATE TABLE IF NOT EXISTS OrderItems (
        ID CHAR(36) NOT NULL PRIMARY KEY,
        OrderId CHAR(36) NOT NULL,
        ProductId CHAR(36) NOT NULL,
        Quantity INT NOT NULL,
        FOREIGN KEY (OrderId) REFERENCES Orders(ID),
        FOREIGN KEY (ProductId) REFERENCES Products(ID)
        );",
};

/// Parents first; loading in this order keeps every foreign key satisfied.
pub fn schemas() -> [&'static TableSchema; 4] {
    [&CUSTOMERS, &PRODUCTS, &ORDERS, &ORDER_ITEMS]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    #[serde(serialize_with = "format::date")]
    pub date_of_birth: NaiveDate,
    #[serde(serialize_with = "format::datetime")]
    pub created_at: NaiveDateTime,
}

impl Customer {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime) -> Customer {
        let first_name: String = FirstName().fake_with_rng(rng);
        let middle_name: String = LastName().fake_with_rng(rng);
        let last_name: String = LastName().fake_with_rng(rng);

        //born between 80 and 18 years ago
        let today = now.date();
        let start = today.checked_sub_months(Months::new(80 * 12)).unwrap_or(today);
        let end = today.checked_sub_months(Months::new(18 * 12)).unwrap_or(today);
        let range = (end - start).num_days().max(1) as u64;
        let offset = rng.random_range(0..range);

        Customer {
            id: random_id(rng),
            name: sanitize_field(&format!("{first_name} {middle_name} {last_name}")),
            date_of_birth: start + Days::new(offset),
            created_at: created_within_year(rng, now),
        }
    }
}

impl Data for Customer {
    fn schema() -> &'static TableSchema {
        &CUSTOMERS
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_fields(fields: &[String]) -> Result<Self, FieldError> {
        Ok(Customer {
            id: parse_uuid("ID", &fields[0])?,
            name: fields[1].clone(),
            date_of_birth: parse_date("DateOfBirth", &fields[2])?,
            created_at: parse_datetime("CreatedAt", &fields[3])?,
        })
    }

    fn into_values(self) -> Vec<Value> {
        vec![
            Value::from(self.id.to_string()),
            Value::from(self.name),
            Value::from(self.date_of_birth),
            Value::from(self.created_at),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: Uuid,
    pub product_name: String,
    #[serde(serialize_with = "format::display")]
    pub price: Decimal,
    #[serde(serialize_with = "format::datetime")]
    pub created_at: NaiveDateTime,
}

impl Product {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime, name: &str) -> Product {
        //0.01 to 50,000.00 in whole cents
        let cents: i64 = rng.random_range(1..=5_000_000);
        Product {
            id: random_id(rng),
            product_name: sanitize_field(name),
            price: Decimal::new(cents, 2),
            created_at: created_within_year(rng, now),
        }
    }
}

impl Data for Product {
    fn schema() -> &'static TableSchema {
        &PRODUCTS
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_fields(fields: &[String]) -> Result<Self, FieldError> {
        Ok(Product {
            id: parse_uuid("ID", &fields[0])?,
            product_name: fields[1].clone(),
            price: Decimal::from_str(&fields[2])
                .map_err(|e| FieldError::new("Price", &fields[2], e))?,
            created_at: parse_datetime("CreatedAt", &fields[3])?,
        })
    }

    fn into_values(self) -> Vec<Value> {
        vec![
            Value::from(self.id.to_string()),
            Value::from(self.product_name),
            Value::from(self.price),
            Value::from(self.created_at),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Uuid,
    #[serde(serialize_with = "format::datetime")]
    pub created_at: NaiveDateTime,
}

impl Order {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime, customer_id: Uuid) -> Order {
        Order {
            id: random_id(rng),
            customer_id,
            created_at: created_within_year(rng, now),
        }
    }
}

impl Data for Order {
    fn schema() -> &'static TableSchema {
        &ORDERS
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_fields(fields: &[String]) -> Result<Self, FieldError> {
        Ok(Order {
            id: parse_uuid("ID", &fields[0])?,
            customer_id: parse_uuid("CustomerId", &fields[1])?,
            created_at: parse_datetime("CreatedAt", &fields[2])?,
        })
    }

    fn into_values(self) -> Vec<Value> {
        vec![
            Value::from(self.id.to_string()),
            Value::from(self.customer_id.to_string()),
            Value::from(self.created_at),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
}

impl OrderItem {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, order_id: Uuid, product_id: Uuid) -> OrderItem {
        OrderItem {
            id: random_id(rng),
            order_id,
            product_id,
            quantity: rng.random_range(1..20),
        }
    }
}

impl Data for OrderItem {
    fn schema() -> &'static TableSchema {
        &ORDER_ITEMS
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_fields(fields: &[String]) -> Result<Self, FieldError> {
        Ok(OrderItem {
            id: parse_uuid("ID", &fields[0])?,
            order_id: parse_uuid("OrderId", &fields[1])?,
            product_id: parse_uuid("ProductId", &fields[2])?,
            quantity: fields[3]
                .parse()
                .map_err(|e| FieldError::new("Quantity", &fields[3], e))?,
        })
    }

    fn into_values(self) -> Vec<Value> {
        vec![
            Value::from(self.id.to_string()),
            Value::from(self.order_id.to_string()),
            Value::from(self.product_id.to_string()),
            Value::from(self.quantity),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use test_case::test_case;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(13, 45, 10).unwrap())
    }

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test_case(Customer::schema(), "ID,Name,DateOfBirth,CreatedAt")]
    #[test_case(Product::schema(), "ID,ProductName,Price,CreatedAt")]
    #[test_case(Order::schema(), "ID,CustomerId,CreatedAt")]
    #[test_case(OrderItem::schema(), "ID,OrderId,ProductId,Quantity")]
    fn headers(schema: &TableSchema, expected: &str) {
        assert_eq!(schema.header(), expected);
    }

    #[test]
    fn schemas_in_dependency_order() {
        let names: Vec<&str> = schemas().iter().map(|s| s.table_name).collect();
        assert_eq!(names, vec!["Customers", "Products", "Orders", "OrderItems"]);
    }

    #[test]
    fn insert_query_has_a_group_per_row() {
        let query = Order::schema().insert_query(2);
        assert_eq!(
            query,
            "INSERT INTO Orders (ID, CustomerId, CreatedAt) VALUES (?, ?, ?), (?, ?, ?)"
        );
    }

    #[test_case("Hammer, claw", "Hammer claw")]
    #[test_case("12\" ruler", "12 ruler")]
    #[test_case("line\r\nbreak", "linebreak")]
    #[test_case("Painter's tape", "Painter's tape")]
    fn sanitize(input: &str, expected: &str) {
        assert_eq!(sanitize_field(input), expected);
    }

    #[test]
    fn customers_fall_in_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        let now = now();
        let oldest = NaiveDate::from_ymd_opt(1945, 6, 15).unwrap();
        let youngest = NaiveDate::from_ymd_opt(2007, 6, 15).unwrap();
        for _ in 0..500 {
            let customer = Customer::generate(&mut rng, now);
            assert!(customer.date_of_birth >= oldest && customer.date_of_birth < youngest);
            assert!(customer.created_at <= now);
            assert!(customer.created_at > now - TimeDelta::days(365));
            assert_eq!(customer.created_at.time(), now.time());
            assert!(customer.name.split(' ').count() >= 3, "{}", customer.name);
        }
    }

    #[test]
    fn products_priced_in_cents() {
        let mut rng = StdRng::seed_from_u64(2);
        let low = Decimal::new(1, 2);
        let high = Decimal::new(5_000_000, 2);
        for _ in 0..500 {
            let product = Product::generate(&mut rng, now(), "Hex bolt, Steel");
            assert!(product.price >= low && product.price <= high);
            assert_eq!(product.price.scale(), 2);
            assert_eq!(product.product_name, "Hex bolt Steel");
        }
    }

    #[test]
    fn quantities_between_one_and_nineteen() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let item = OrderItem::generate(&mut rng, Uuid::nil(), Uuid::nil());
            assert!((1..=19).contains(&item.quantity));
        }
    }

    #[test]
    fn seeded_generation_repeats() {
        let a = Customer::generate(&mut StdRng::seed_from_u64(9), now());
        let b = Customer::generate(&mut StdRng::seed_from_u64(9), now());
        assert_eq!(a, b);
        assert_eq!(a.id.get_version_num(), 4);
    }

    #[test]
    fn customer_from_fields() {
        let customer = Customer::from_fields(&fields(&[
            "5f0c6a56-4b8e-4a43-9a3f-2f5e0d1f6c11",
            "Ada Byron Lovelace",
            "1980-02-29",
            "2025-01-31 08:15:00",
        ]))
        .unwrap();
        assert_eq!(customer.name, "Ada Byron Lovelace");
        assert_eq!(customer.date_of_birth, NaiveDate::from_ymd_opt(1980, 2, 29).unwrap());
        assert_eq!(customer.created_at.format(DATETIME_FORMAT).to_string(), "2025-01-31 08:15:00");
    }

    #[test]
    fn product_from_fields_keeps_price() {
        let product = Product::from_fields(&fields(&[
            "5f0c6a56-4b8e-4a43-9a3f-2f5e0d1f6c11",
            "Wing nut Brass 3mm x 10mm",
            "1234.50",
            "2025-01-31 08:15:00",
        ]))
        .unwrap();
        assert_eq!(product.price, Decimal::new(123450, 2));
    }

    #[test_case(&["not-a-guid", "x", "2025-01-31 08:15:00"], "ID")]
    #[test_case(&["5f0c6a56-4b8e-4a43-9a3f-2f5e0d1f6c11", "nope", "2025-01-31 08:15:00"], "CustomerId")]
    #[test_case(&["5f0c6a56-4b8e-4a43-9a3f-2f5e0d1f6c11", "5f0c6a56-4b8e-4a43-9a3f-2f5e0d1f6c11", "yesterday"], "CreatedAt")]
    fn order_field_errors_name_the_column(values: &[&str], column: &str) {
        let error = Order::from_fields(&fields(values)).unwrap_err();
        assert_eq!(error.column, column);
    }

    #[test]
    fn quantity_must_be_an_integer() {
        let id = "5f0c6a56-4b8e-4a43-9a3f-2f5e0d1f6c11";
        let error = OrderItem::from_fields(&fields(&[id, id, id, "two"])).unwrap_err();
        assert_eq!(error.column, "Quantity");
        assert_eq!(error.value, "two");
    }

    #[test]
    fn values_follow_column_order() {
        let item = OrderItem {
            id: Uuid::nil(),
            order_id: Uuid::nil(),
            product_id: Uuid::from_u128(7),
            quantity: 4,
        };
        let values = item.into_values();
        assert_eq!(values.len(), OrderItem::schema().columns.len());
        assert_eq!(values[2], Value::from(Uuid::from_u128(7).to_string()));
        assert_eq!(values[3], Value::from(4));
    }
}
