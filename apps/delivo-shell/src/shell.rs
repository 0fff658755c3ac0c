//! # Interactive Shell
//!
//! Line-oriented menus over [`delivo_core`]. Generic over input and output
//! so sessions can be scripted in tests.
//!
//! ## Menu Tree
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Shell Menus                                    │
//! │                                                                         │
//! │  Choose role                                                            │
//! │  ├── 1) User                                                            │
//! │  │   ├── 1) Show menu ──► preview item + allowed extras                 │
//! │  │   ├── 2) Create order                                                │
//! │  │   │   └── CART: 1) Add food ──► Extras loop                          │
//! │  │   │             2) Checkout ──► receipt                              │
//! │  │   │             0) Cancel                                            │
//! │  │   ├── 3) View my orders                                              │
//! │  │   └── 0) Logout                                                      │
//! │  ├── 2) Admin                                                           │
//! │  │   ├── 1) Update order status                                         │
//! │  │   └── 0) Logout                                                      │
//! │  └── 0) Exit                                                            │
//! │                                                                         │
//! │  End of input anywhere = Exit                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Notifications collected by the user are printed as `🔔 <message>` right
//! after the action that produced them.

use std::io::{BufRead, Write};
use std::rc::Rc;

use delivo_core::validation::{parse_menu_choice, parse_order_id};
use delivo_core::{
    catalog, Cart, CoreError, Customization, Item, Order, OrderRegistry, OrderStatus, User,
};
use tracing::debug;

use crate::config::{ReceiptFormat, ShellConfig};
use crate::error::ShellResult;

// =============================================================================
// Control Flow
// =============================================================================

/// Whether the enclosing menu keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Outcome of a sub-prompt that produces a value.
enum Step<T> {
    Done(T),
    Back,
    Exit,
}

// =============================================================================
// Shell
// =============================================================================

/// One interactive session: a single user plus an admin view on the same
/// registry.
pub struct Shell<R, W> {
    input: R,
    out: W,
    user: Rc<User>,
    registry: OrderRegistry,
    receipt_format: ReceiptFormat,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(config: &ShellConfig, input: R, out: W) -> Self {
        let user = Rc::new(User::new(config.user_name.clone()));
        let mut registry = OrderRegistry::with_policy(config.transition_policy);
        registry.subscribe(user.clone());

        Shell {
            input,
            out,
            user,
            registry,
            receipt_format: config.receipt_format,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn registry(&self) -> &OrderRegistry {
        &self.registry
    }

    /// Runs until the user exits or input ends.
    pub fn run(&mut self) -> ShellResult<()> {
        writeln!(self.out, "=== DELIVERING SYSTEM <<Delivo>> ===")?;

        loop {
            writeln!(self.out, "\nChoose role:")?;
            writeln!(self.out, "1) User")?;
            writeln!(self.out, "2) Admin")?;
            writeln!(self.out, "0) Exit")?;

            let Some(role) = self.prompt("Choose: ")? else {
                break;
            };

            let flow = match role.as_str() {
                "0" => break,
                "1" => self.user_menu()?,
                "2" => self.admin_menu()?,
                _ => {
                    writeln!(self.out, "Unknown option")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        writeln!(self.out, "Bye!")?;
        self.out.flush()?;
        Ok(())
    }

    // =========================================================================
    // User Menu
    // =========================================================================

    fn user_menu(&mut self) -> ShellResult<Flow> {
        debug!(user = self.user.name(), "Entering user menu");

        loop {
            writeln!(self.out, "\n--- USER MENU ({}) ---", self.user.name())?;
            writeln!(self.out, "1) Show menu")?;
            writeln!(self.out, "2) Create order")?;
            writeln!(self.out, "3) View my orders")?;
            writeln!(self.out, "0) Logout")?;

            let Some(choice) = self.prompt("Choose: ")? else {
                return Ok(Flow::Exit);
            };

            let flow = match choice.as_str() {
                "0" => return Ok(Flow::Continue),
                "1" => self.show_menu()?,
                "2" => self.create_order()?,
                "3" => {
                    self.view_orders()?;
                    Flow::Continue
                }
                _ => {
                    writeln!(self.out, "Unknown option")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
    }

    fn show_menu(&mut self) -> ShellResult<Flow> {
        loop {
            self.print_food_menu()?;
            writeln!(self.out, "0) Back")?;

            let Some(input) = self.prompt("Choose to preview: ")? else {
                return Ok(Flow::Exit);
            };

            let menu = catalog::menu();
            let entry = match parse_menu_choice(&input, menu.len()) {
                Ok(0) => return Ok(Flow::Continue),
                Ok(n) => &menu[n - 1],
                Err(_) => continue,
            };

            let extras: Vec<&str> = entry.extras.iter().map(|m| m.id()).collect();
            writeln!(
                self.out,
                "{} | {} | {}",
                entry.name, entry.description, entry.price
            )?;
            writeln!(self.out, "Extras: {}", extras.join(", "))?;
        }
    }

    fn create_order(&mut self) -> ShellResult<Flow> {
        let mut cart = Cart::new();

        loop {
            writeln!(self.out, "\n--- CART ---")?;
            if cart.is_empty() {
                writeln!(self.out, "(empty)")?;
            } else {
                for item in cart.items() {
                    writeln!(self.out, "- {} ({})", item.description(), item.price())?;
                }
                writeln!(self.out, "Total: {}", cart.total())?;
            }
            writeln!(self.out, "1) Add food")?;
            writeln!(self.out, "2) Checkout")?;
            writeln!(self.out, "0) Cancel")?;

            let Some(choice) = self.prompt("Choose: ")? else {
                return Ok(Flow::Exit);
            };

            match choice.as_str() {
                "0" => {
                    debug!(items = cart.len(), "Cart cancelled");
                    return Ok(Flow::Continue);
                }
                "1" => {
                    let base = match self.choose_food()? {
                        Step::Done(item) => item,
                        Step::Back => continue,
                        Step::Exit => return Ok(Flow::Exit),
                    };
                    match self.choose_extras(base)? {
                        Step::Done(item) => cart.add(item),
                        Step::Back => {}
                        Step::Exit => return Ok(Flow::Exit),
                    }
                }
                "2" => {
                    if cart.is_empty() {
                        writeln!(self.out, "Cart is empty.")?;
                        continue;
                    }
                    let order = self.registry.create_order(&self.user, cart.items());
                    self.flush_notifications()?;
                    self.print_receipt(&order)?;
                    return Ok(Flow::Continue);
                }
                _ => writeln!(self.out, "Unknown option")?,
            }
        }
    }

    fn choose_food(&mut self) -> ShellResult<Step<Item>> {
        self.print_food_menu()?;
        writeln!(self.out, "0) Back")?;

        let Some(input) = self.prompt("Choose food: ")? else {
            return Ok(Step::Exit);
        };

        let menu = catalog::menu();
        match parse_menu_choice(&input, menu.len()) {
            Ok(0) => Ok(Step::Back),
            Ok(n) => Ok(Step::Done(catalog::create(menu[n - 1].item_type))),
            Err(_) => Ok(Step::Back),
        }
    }

    /// Offers the remaining extras until the user finishes or none are left.
    fn choose_extras(&mut self, item: Item) -> ShellResult<Step<Item>> {
        let name = item.name();
        let mut session = Customization::new(item);

        while !session.is_exhausted() {
            writeln!(self.out, "\nExtras for {}:", name)?;
            for (i, modifier) in session.remaining().iter().enumerate() {
                writeln!(self.out, "{}) {}", i + 1, modifier)?;
            }
            writeln!(self.out, "0) Finish extras")?;

            let Some(input) = self.prompt("Choose extra: ")? else {
                return Ok(Step::Exit);
            };

            match parse_menu_choice(&input, session.remaining().len()) {
                Ok(0) => break,
                Ok(n) => match session.select(n - 1) {
                    Ok(modifier) => writeln!(self.out, "✓ Added: {}", modifier)?,
                    Err(_) => writeln!(self.out, "Invalid choice")?,
                },
                Err(_) => writeln!(self.out, "Invalid choice")?,
            }
        }

        Ok(Step::Done(session.finish()))
    }

    fn view_orders(&mut self) -> ShellResult<()> {
        let orders = self.user.orders();
        if orders.is_empty() {
            writeln!(self.out, "No orders.")?;
            return Ok(());
        }

        for order in orders {
            writeln!(self.out, "\nOrder #{}", order.id())?;
            for item in order.items() {
                writeln!(self.out, " - {} ({})", item.description(), item.price())?;
            }
            writeln!(self.out, "Status: {}", order.status())?;
        }
        Ok(())
    }

    // =========================================================================
    // Admin Menu
    // =========================================================================

    fn admin_menu(&mut self) -> ShellResult<Flow> {
        debug!("Entering admin menu");

        loop {
            writeln!(self.out, "\n--- ADMIN MENU ---")?;
            writeln!(self.out, "1) Update order status")?;
            writeln!(self.out, "0) Logout")?;

            let Some(choice) = self.prompt("Choose: ")? else {
                return Ok(Flow::Exit);
            };

            match choice.as_str() {
                "0" => return Ok(Flow::Continue),
                "1" => {
                    if self.update_status()? == Flow::Exit {
                        return Ok(Flow::Exit);
                    }
                }
                _ => writeln!(self.out, "Unknown option")?,
            }
        }
    }

    fn update_status(&mut self) -> ShellResult<Flow> {
        if !self.registry.has_orders() {
            writeln!(self.out, "No orders yet.")?;
            return Ok(Flow::Continue);
        }

        for order in self.registry.all_orders() {
            writeln!(self.out, "Order #{} | Status: {}", order.id(), order.status())?;
        }

        let Some(raw_id) = self.prompt("Enter order ID: ")? else {
            return Ok(Flow::Exit);
        };

        for (i, status) in OrderStatus::ALL.iter().enumerate() {
            writeln!(self.out, "{}) {}", i + 1, status)?;
        }
        let Some(raw_status) = self.prompt("Choose new status: ")? else {
            return Ok(Flow::Exit);
        };

        // An unusable status choice changes nothing and prints nothing.
        let status = match parse_menu_choice(&raw_status, OrderStatus::ALL.len()) {
            Ok(n) if n >= 1 => OrderStatus::ALL[n - 1],
            _ => return Ok(Flow::Continue),
        };
        let Ok(id) = parse_order_id(&raw_id) else {
            writeln!(self.out, "Order not found.")?;
            return Ok(Flow::Continue);
        };

        match self.registry.update_status(id, status) {
            Ok(_) => self.flush_notifications()?,
            Err(CoreError::OrderNotFound(_)) => writeln!(self.out, "Order not found.")?,
            Err(err) if err.is_recoverable() => writeln!(self.out, "{}", err)?,
            Err(err) => return Err(err.into()),
        }

        Ok(Flow::Continue)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn print_food_menu(&mut self) -> ShellResult<()> {
        for (i, entry) in catalog::menu().iter().enumerate() {
            writeln!(self.out, "{}) {:<7}{}", i + 1, entry.name, entry.price)?;
        }
        Ok(())
    }

    fn print_receipt(&mut self, order: &Order) -> ShellResult<()> {
        match self.receipt_format {
            ReceiptFormat::Text => writeln!(self.out, "{}", order.receipt())?,
            ReceiptFormat::Json => {
                let json = serde_json::to_string_pretty(&order.summary())?;
                writeln!(self.out, "{}", json)?;
            }
        }
        Ok(())
    }

    fn flush_notifications(&mut self) -> ShellResult<()> {
        for message in self.user.take_notifications() {
            writeln!(self.out, "🔔 {}", message)?;
        }
        Ok(())
    }

    /// Writes `label`, then reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> ShellResult<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delivo_core::{OrderId, TransitionPolicy};

    fn run_script<'a>(config: &ShellConfig, script: &'a str) -> (String, Shell<&'a [u8], Vec<u8>>) {
        let mut shell = Shell::new(config, script.as_bytes(), Vec::new());
        shell.run().unwrap();
        let output = String::from_utf8(shell.out.clone()).unwrap();
        (output, shell)
    }

    // user: create order, add pizza + cheese + large, add cola, checkout, logout
    const PIZZA_AND_COLA: &str = "1\n2\n1\n1\n1\n2\n0\n1\n4\n0\n2\n0\n";

    // user: create order, add plain cola, checkout, logout
    const COLA_ONLY: &str = "1\n2\n1\n4\n0\n2\n0\n";

    #[test]
    fn test_exit_immediately() {
        let (output, shell) = run_script(&ShellConfig::default(), "0\n");
        assert!(output.starts_with("=== DELIVERING SYSTEM <<Delivo>> ==="));
        assert!(output.ends_with("Bye!\n"));
        assert!(!shell.registry().has_orders());
    }

    #[test]
    fn test_end_of_input_exits() {
        let (output, _) = run_script(&ShellConfig::default(), "");
        assert!(output.ends_with("Bye!\n"));

        // EOF deep inside the extras loop
        let (output, shell) = run_script(&ShellConfig::default(), "1\n2\n1\n1\n");
        assert!(output.ends_with("Bye!\n"));
        assert!(!shell.registry().has_orders());
    }

    #[test]
    fn test_unknown_role() {
        let (output, _) = run_script(&ShellConfig::default(), "7\n0\n");
        assert!(output.contains("Unknown option"));
    }

    #[test]
    fn test_checkout_pizza_and_cola() {
        let script = format!("{}0\n", PIZZA_AND_COLA);
        let (output, shell) = run_script(&ShellConfig::default(), &script);

        assert!(output.contains("✓ Added: CHEESE"));
        assert!(output.contains("✓ Added: LARGE"));
        assert!(output.contains("- Classic pizza, cheese, large ($13.50)"));
        assert!(output.contains("🔔 Order #1 created"));
        assert!(output.contains("Order #1 | Total $15.50 | PLACED"));

        let order = shell.registry().get(OrderId::new(1)).unwrap();
        assert_eq!(order.items().len(), 2);
        assert_eq!(shell.user().orders().len(), 1);
        assert!(shell.user().notifications().is_empty());
    }

    #[test]
    fn test_consumed_extra_is_not_offered_again() {
        // pizza: pick CHEESE, then try 3 which no longer exists
        let script = "1\n2\n1\n1\n1\n3\n0\n0\n0\n0\n";
        let (output, _) = run_script(&ShellConfig::default(), script);

        assert!(output.contains("✓ Added: CHEESE"));
        assert!(output.contains("Invalid choice"));
        let after_cheese = output.split("✓ Added: CHEESE").nth(1).unwrap();
        let next_offer = after_cheese.split("0) Finish extras").next().unwrap();
        assert!(!next_offer.contains("CHEESE"));
    }

    #[test]
    fn test_empty_cart_checkout() {
        let (output, shell) = run_script(&ShellConfig::default(), "1\n2\n2\n0\n0\n0\n");
        assert!(output.contains("Cart is empty."));
        assert!(!shell.registry().has_orders());
    }

    #[test]
    fn test_show_menu_preview() {
        let (output, _) = run_script(&ShellConfig::default(), "1\n1\n3\n0\n0\n0\n");
        assert!(output.contains("3) Fries  $3.50"));
        assert!(output.contains("Fries | Crispy fries | $3.50"));
        assert!(output.contains("Extras: SPICY, LARGE"));
    }

    #[test]
    fn test_view_orders() {
        let script = format!("{}1\n3\n0\n0\n", COLA_ONLY);
        let (output, _) = run_script(&ShellConfig::default(), &script);
        assert!(output.contains(" - Coca cola ($2.00)"));
        assert!(output.contains("Status: PLACED"));

        let (output, _) = run_script(&ShellConfig::default(), "1\n3\n0\n0\n");
        assert!(output.contains("No orders."));
    }

    #[test]
    fn test_admin_without_orders() {
        let (output, _) = run_script(&ShellConfig::default(), "2\n1\n0\n0\n");
        assert!(output.contains("No orders yet."));
    }

    #[test]
    fn test_admin_updates_status_twice() {
        let script = format!("{}2\n1\n1\n2\n1\n1\n2\n0\n0\n", COLA_ONLY);
        let (output, shell) = run_script(&ShellConfig::default(), &script);

        assert!(output.contains("Order #1 | Status: PLACED"));
        assert_eq!(output.matches("🔔 Order #1 status -> COOKING").count(), 2);
        assert_eq!(
            shell.registry().get(OrderId::new(1)).unwrap().status(),
            OrderStatus::Cooking
        );
    }

    #[test]
    fn test_admin_unknown_order() {
        let script = format!("{}2\n1\n9\n2\n0\n0\n", COLA_ONLY);
        let (output, shell) = run_script(&ShellConfig::default(), &script);

        assert!(output.contains("Order not found."));
        assert!(!output.contains("status ->"));
        assert_eq!(
            shell.registry().get(OrderId::new(1)).unwrap().status(),
            OrderStatus::Placed
        );
    }

    #[test]
    fn test_bad_preview_and_food_numbers_reprompt_silently() {
        // preview 9, back; create order, food 9, cancel
        let (output, shell) = run_script(&ShellConfig::default(), "1\n1\n9\n0\n2\n1\n9\n0\n0\n0\n");

        assert!(!output.contains("Unknown option"));
        assert!(!output.contains("Invalid choice"));
        assert_eq!(output.matches("Choose to preview: ").count(), 2);
        assert!(!shell.registry().has_orders());
    }

    #[test]
    fn test_unparseable_order_id_still_asks_for_status() {
        let script = format!("{}2\n1\nabc\n2\n0\n0\n", COLA_ONLY);
        let (output, shell) = run_script(&ShellConfig::default(), &script);

        let after_id = output.split("Enter order ID: ").nth(1).unwrap();
        let status_prompt = after_id.find("Choose new status: ").unwrap();
        let not_found = after_id.find("Order not found.").unwrap();
        assert!(status_prompt < not_found);
        assert_eq!(
            shell.registry().get(OrderId::new(1)).unwrap().status(),
            OrderStatus::Placed
        );
    }

    #[test]
    fn test_bad_status_choice_changes_nothing() {
        let script = format!("{}2\n1\n1\n7\n0\n0\n", COLA_ONLY);
        let (output, shell) = run_script(&ShellConfig::default(), &script);

        assert!(!output.contains("status ->"));
        assert!(!output.contains("Order not found."));
        assert_eq!(
            shell.registry().get(OrderId::new(1)).unwrap().status(),
            OrderStatus::Placed
        );
    }

    #[test]
    fn test_strict_policy_rejects_skip() {
        let config = ShellConfig {
            transition_policy: TransitionPolicy::Strict,
            ..ShellConfig::default()
        };
        let script = format!("{}2\n1\n1\n3\n0\n0\n", COLA_ONLY);
        let (output, shell) = run_script(&config, &script);

        assert!(output.contains("Order #1 cannot move from PLACED to READY"));
        assert_eq!(
            shell.registry().get(OrderId::new(1)).unwrap().status(),
            OrderStatus::Placed
        );
    }

    #[test]
    fn test_json_receipt() {
        let config = ShellConfig {
            receipt_format: ReceiptFormat::Json,
            ..ShellConfig::default()
        };
        let script = format!("{}0\n", COLA_ONLY);
        let (output, _) = run_script(&config, &script);

        assert!(output.contains("\"total_cents\": 200"));
        assert!(output.contains("\"status\": \"PLACED\""));
        assert!(!output.contains("Order #1 | Total"));
    }

    #[test]
    fn test_user_name_from_config() {
        let config = ShellConfig {
            user_name: "Ann".to_string(),
            ..ShellConfig::default()
        };
        let (output, shell) = run_script(&config, "1\n0\n0\n");
        assert!(output.contains("--- USER MENU (Ann) ---"));
        assert_eq!(shell.user().name(), "Ann");
    }
}
