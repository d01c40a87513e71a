//! A backend that answers from a script and records every call, so tests can
//! assert on the exact SQL and arguments the engine produced.

use rowbind::log::render_inline;
use rowbind::{Backend, Db, QueryLog, Result, Row, RowbindError, Value};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    QueryOne,
    QueryMany,
    Exec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub sql: String,
    pub args: Vec<Value>,
}

#[derive(Debug, Clone)]
pub enum Reply {
    One(Option<Row>),
    Many(Vec<Row>),
    Exec(u64),
    Fail(String),
}

#[derive(Debug, Default)]
struct Script {
    replies: VecDeque<Reply>,
    calls: Vec<Call>,
}

/// Cloning shares the script, so a test can keep a handle after moving the
/// backend into a [`Db`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    script: Rc<RefCell<Script>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn db(&self) -> Db {
        Db::new(self.clone())
    }

    pub fn reply(&self, reply: Reply) -> &Self {
        self.script.borrow_mut().replies.push_back(reply);
        self
    }

    pub fn one(&self, values: Vec<Value>) -> &Self {
        self.reply(Reply::One(Some(Row::from(values))))
    }

    pub fn none(&self) -> &Self {
        self.reply(Reply::One(None))
    }

    pub fn many(&self, rows: Vec<Vec<Value>>) -> &Self {
        self.reply(Reply::Many(rows.into_iter().map(Row::from).collect()))
    }

    pub fn affected(&self, count: u64) -> &Self {
        self.reply(Reply::Exec(count))
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.reply(Reply::Fail(message.to_string()))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.borrow().calls.clone()
    }

    pub fn sql(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.sql).collect()
    }

    fn next(&mut self, method: Method, sql: &str, args: &[Value]) -> Result<Reply> {
        let mut script = self.script.borrow_mut();
        script.calls.push(Call {
            method,
            sql: sql.to_string(),
            args: args.to_vec(),
        });

        match script.replies.pop_front() {
            Some(Reply::Fail(message)) => Err(RowbindError::Execution(message)),
            Some(reply) => Ok(reply),
            None => panic!("no reply scripted for {method:?}: {sql}"),
        }
    }
}

impl Backend for ScriptedBackend {
    fn query_one(&mut self, sql: &str, args: &[Value]) -> Result<Option<Row>> {
        match self.next(Method::QueryOne, sql, args)? {
            Reply::One(row) => Ok(row),
            other => panic!("query_one got scripted {other:?}"),
        }
    }

    fn query_many(&mut self, sql: &str, args: &[Value]) -> Result<Vec<Row>> {
        match self.next(Method::QueryMany, sql, args)? {
            Reply::Many(rows) => Ok(rows),
            other => panic!("query_many got scripted {other:?}"),
        }
    }

    fn exec(&mut self, sql: &str, args: &[Value]) -> Result<u64> {
        match self.next(Method::Exec, sql, args)? {
            Reply::Exec(count) => Ok(count),
            other => panic!("exec got scripted {other:?}"),
        }
    }
}

/// A query log that keeps every inline-rendered statement.
pub fn recording_log() -> (impl QueryLog, Rc<RefCell<Vec<String>>>) {
    let lines = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&lines);
    let log = move |sql: &str, args: &[Value]| {
        sink.borrow_mut().push(render_inline(sql, args));
    };
    (log, lines)
}
