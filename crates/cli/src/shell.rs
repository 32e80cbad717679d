//! Interactive menu loop.

use std::io::{self, BufRead, Write};

use chrono::Utc;

use orderdesk_catalog::Catalog;
use orderdesk_core::ProductId;
use orderdesk_orders::{place_order, Ledger, OrderRequest};

use crate::display;
use crate::errlog::ErrorLog;
use crate::input;

/// Console shell over the catalog and ledger.
///
/// Generic over its input/output streams so whole sessions can be scripted
/// in tests.
pub struct Shell<R, W> {
    input: R,
    output: W,
    admin_code: String,
    errlog: ErrorLog,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, admin_code: impl Into<String>, errlog: ErrorLog) -> Self {
        Self {
            input,
            output,
            admin_code: admin_code.into(),
            errlog,
        }
    }

    /// Run the menu loop until the operator exits or input ends.
    pub fn run(&mut self, catalog: &mut Catalog, ledger: &mut Ledger) -> io::Result<()> {
        loop {
            writeln!(self.output, "1. Place Order")?;
            writeln!(self.output, "2. View Orders")?;
            writeln!(self.output, "3. Admin - Add Product")?;
            writeln!(self.output, "4. Exit")?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };
            match choice.trim() {
                "1" => self.place_order(catalog, ledger)?,
                "2" => self.view_orders(ledger)?,
                "3" => self.admin_add_product(catalog)?,
                "4" => break,
                _ => writeln!(self.output, "Invalid option. Please try again.")?,
            }
        }
        Ok(())
    }

    /// Read one line; `None` means end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Write one line to the dated error log; a failing log never aborts
    /// the session.
    fn log_error(&mut self, message: &str) -> io::Result<()> {
        if let Err(err) = self.errlog.record(message) {
            tracing::warn!(%err, "error log write failed");
            writeln!(self.output, "Error logging: {err}")?;
        }
        Ok(())
    }

    fn place_order(&mut self, catalog: &mut Catalog, ledger: &mut Ledger) -> io::Result<()> {
        if catalog.is_empty() {
            writeln!(self.output, "No products available.")?;
            return Ok(());
        }

        writeln!(self.output, "Available Products:")?;
        writeln!(self.output, "{}", display::products_table(catalog))?;

        let mut request = OrderRequest::new();
        loop {
            let Some(line) = self.prompt("Enter Product ID (or 0 to finish): ")? else {
                break;
            };

            let product_id: ProductId = match line.trim().parse() {
                Ok(id) => id,
                Err(_) => {
                    writeln!(self.output, "Invalid input. Please enter a valid number.")?;
                    self.log_error("invalid input entered")?;
                    continue;
                }
            };
            if product_id.value() == 0 {
                break;
            }

            let (name, available) = match catalog.get(product_id) {
                Some(product) => (product.name().to_string(), product.stock()),
                None => {
                    writeln!(self.output, "Invalid product ID. Please enter a valid ID.")?;
                    self.log_error("invalid product id entered")?;
                    continue;
                }
            };

            writeln!(self.output, "Available quantity for {name}: {available}")?;
            let Some(quantity_line) = self.prompt("Enter Quantity: ")? else {
                break;
            };
            match input::parse_quantity(&quantity_line) {
                Ok(quantity) if quantity <= available => request.push(product_id, quantity),
                Ok(quantity) => {
                    writeln!(
                        self.output,
                        "Invalid quantity. Please enter a positive integer within the available quantity."
                    )?;
                    self.log_error(&format!(
                        "invalid quantity {quantity} entered for product {name}"
                    ))?;
                }
                Err(_) => {
                    writeln!(
                        self.output,
                        "Invalid quantity. Please enter a positive integer within the available quantity."
                    )?;
                    self.log_error(&format!("invalid quantity entered for product {name}"))?;
                }
            }
        }

        if request.is_empty() {
            writeln!(self.output, "No items entered; order cancelled.")?;
            return Ok(());
        }

        match place_order(catalog, ledger, &request, Utc::now()) {
            Ok(order) => {
                tracing::info!(order_id = %order.id(), total_cents = order.total(), "order committed");
                writeln!(
                    self.output,
                    "Order placed successfully! Order ID: {}, Order Date: {}, Estimated Delivery Date: {}",
                    order.id(),
                    order.placed_at().format("%Y-%m-%d %H:%M:%S"),
                    order.delivery_due().format("%Y-%m-%d"),
                )?;
            }
            Err(err) => {
                writeln!(self.output, "Order rejected: {err}")?;
            }
        }
        Ok(())
    }

    fn view_orders(&mut self, ledger: &Ledger) -> io::Result<()> {
        if ledger.is_empty() {
            writeln!(self.output, "No orders placed yet.")?;
            return Ok(());
        }

        writeln!(self.output, "Orders:")?;
        for order in ledger.orders() {
            writeln!(self.output, "{}", display::order_table(order))?;
        }
        Ok(())
    }

    fn admin_add_product(&mut self, catalog: &mut Catalog) -> io::Result<()> {
        let Some(code) = self.prompt("Enter admin code: ")? else {
            return Ok(());
        };
        if code.trim() != self.admin_code {
            writeln!(self.output, "Invalid option. Please try again.")?;
            return Ok(());
        }

        writeln!(self.output, "Admin - Add Product")?;
        let Some(name) = self.prompt("Enter Product Name: ")? else {
            return Ok(());
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            writeln!(self.output, "Product name cannot be empty.")?;
            self.log_error("empty product name entered")?;
            return Ok(());
        }

        let Some(price_line) = self.prompt("Enter Product Price: ")? else {
            return Ok(());
        };
        let unit_price = match input::parse_price(&price_line) {
            Ok(price) => price,
            Err(_) => {
                writeln!(self.output, "Invalid price. Please enter a valid number.")?;
                self.log_error("invalid product price entered")?;
                return Ok(());
            }
        };

        let Some(quantity_line) = self.prompt("Enter Available Quantity: ")? else {
            return Ok(());
        };
        let stock = match quantity_line.trim().parse::<u32>() {
            Ok(stock) => stock,
            Err(_) => {
                writeln!(self.output, "Invalid quantity. Please enter a valid number.")?;
                self.log_error("invalid product quantity entered")?;
                return Ok(());
            }
        };

        let id = catalog.add(name, unit_price, stock);
        tracing::info!(product_id = %id, "product added");
        writeln!(self.output, "Product added successfully!")?;
        Ok(())
    }
}
