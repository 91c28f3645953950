//! In-memory backend for app tests.
//!
//! Behaves like a tiny version of the real server and records every call,
//! so tests can assert both the outcome and that nothing was sent.

use std::cell::RefCell;
use std::collections::HashMap;

use estoque_api::{ClientError, ClientResult, InventoryBackend};
use estoque_core::{
    Credentials, MovementReceipt, MovementType, NewMovement, Product, ProductId, ProductPayload,
    StockStatus, User,
};

use crate::app::App;

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login(Credentials),
    List(Option<String>),
    Create(ProductPayload),
    Update(ProductId, ProductPayload),
    Delete(ProductId),
    Register(NewMovement),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Login,
    List,
    Create,
    Update,
    Delete,
    Register,
}

#[derive(Debug, Default)]
pub struct FakeBackend {
    user: Option<User>,
    products: RefCell<Vec<Product>>,
    next_id: RefCell<ProductId>,
    failures: RefCell<HashMap<Op, ClientError>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        FakeBackend {
            next_id: RefCell::new(100),
            ..Default::default()
        }
    }

    /// The user any login succeeds as. Without one, login is rejected.
    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_products(self, products: Vec<Product>) -> Self {
        *self.products.borrow_mut() = products;
        self
    }

    /// Makes every later call of `op` fail with `err`.
    pub fn fail(&self, op: Op, err: ClientError) {
        self.failures.borrow_mut().insert(op, err);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn stored(&self, id: ProductId) -> Option<Product> {
        self.products.borrow().iter().find(|p| p.id == id).cloned()
    }

    fn record(&self, op: Op, call: Call) -> ClientResult<()> {
        self.calls.borrow_mut().push(call);
        match self.failures.borrow().get(&op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn not_found() -> ClientError {
        ClientError::server(404, Some("Produto não encontrado".to_string()))
    }
}

impl InventoryBackend for FakeBackend {
    async fn login(&self, credentials: &Credentials) -> ClientResult<User> {
        self.record(Op::Login, Call::Login(credentials.clone()))?;
        self.user
            .clone()
            .ok_or_else(|| ClientError::server(401, Some("Credenciais inválidas".to_string())))
    }

    async fn list_products(&self, search: Option<&str>) -> ClientResult<Vec<Product>> {
        self.record(Op::List, Call::List(search.map(str::to_string)))?;
        let products = self.products.borrow();
        Ok(match search {
            Some(term) => {
                let term = term.to_lowercase();
                products
                    .iter()
                    .filter(|p| p.nome.to_lowercase().contains(&term))
                    .cloned()
                    .collect()
            }
            None => products.clone(),
        })
    }

    async fn create_product(&self, payload: &ProductPayload) -> ClientResult<Option<Product>> {
        self.record(Op::Create, Call::Create(payload.clone()))?;
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        };
        let product = Product {
            id,
            nome: payload.nome.clone(),
            quantidade: payload.quantidade,
            estoque_minimo: payload.estoque_minimo,
        };
        self.products.borrow_mut().push(product.clone());
        Ok(Some(product))
    }

    async fn update_product(
        &self,
        id: ProductId,
        payload: &ProductPayload,
    ) -> ClientResult<Option<Product>> {
        self.record(Op::Update, Call::Update(id, payload.clone()))?;
        let mut products = self.products.borrow_mut();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(Self::not_found)?;
        product.nome = payload.nome.clone();
        product.quantidade = payload.quantidade;
        product.estoque_minimo = payload.estoque_minimo;
        Ok(Some(product.clone()))
    }

    async fn delete_product(&self, id: ProductId) -> ClientResult<()> {
        self.record(Op::Delete, Call::Delete(id))?;
        let mut products = self.products.borrow_mut();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }

    async fn register_movement(&self, movement: &NewMovement) -> ClientResult<MovementReceipt> {
        self.record(Op::Register, Call::Register(movement.clone()))?;
        let mut products = self.products.borrow_mut();
        let product = products
            .iter_mut()
            .find(|p| p.id == movement.produto_id)
            .ok_or_else(Self::not_found)?;
        product.quantidade = match movement.tipo {
            MovementType::Entrada => product.quantidade.saturating_add(movement.quantidade),
            MovementType::Saida => product.quantidade.saturating_sub(movement.quantidade),
        };
        Ok(MovementReceipt {
            produto: Some(StockStatus {
                abaixo_do_minimo: product.is_below_minimum(),
            }),
        })
    }
}

pub fn ana() -> User {
    User {
        id: 1,
        nome: "Ana".to_string(),
        email: Some("a@b.com".to_string()),
    }
}

pub fn product(id: ProductId, nome: &str, quantidade: u32, estoque_minimo: u32) -> Product {
    Product {
        id,
        nome: nome.to_string(),
        quantidade,
        estoque_minimo,
    }
}

/// An app already past the login screen.
pub fn logged_in_app(backend: FakeBackend) -> App<FakeBackend> {
    let mut app = App::new(backend);
    app.state.session.sign_in(ana());
    app
}
