use coreclique::graph::HashMapGraph;
use coreclique::io::{CliqueWriter, CoreWriter, DimacsRead};
#[cfg(feature = "handle-ctrlc")]
use coreclique::signals::received_ctrl_c;
use coreclique::timeout::{initialize_timeout, timeout};
use coreclique::util::Stopper;
use coreclique::{CoreDecomposition, GraphStatistics, MaximalCliques};
use std::convert::TryFrom;
use std::fs::{File, OpenOptions};
use std::io;
use std::io::{stdin, stdout, BufReader, Write};
use std::path::PathBuf;
use structopt::StructOpt;

#[cfg(not(target_env = "msvc"))]
use jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "coreclique-cli",
    about = "Computes the k-core decomposition or all maximal cliques of an input graph."
)]
struct Opt {
    /// Input file, using the DIMACS/PACE edge list format.
    /// `stdin` if not specified.
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Output file. `stdout` if not specified.
    #[structopt(parse(from_os_str))]
    output: Option<PathBuf>,

    /// Output the core decomposition instead of the maximal cliques.
    #[structopt(short, long)]
    cores: bool,

    /// Prefix the result with graph statistics as comment lines.
    #[structopt(short, long)]
    stats: bool,

    /// Give up the clique enumeration after this many seconds.
    #[structopt(short, long)]
    timeout: Option<u64>,
}

struct CliStopper;

impl Stopper for CliStopper {
    fn stop(&mut self) -> bool {
        #[cfg(feature = "handle-ctrlc")]
        if received_ctrl_c() {
            return true;
        }
        timeout()
    }

    fn init(&mut self) {}
}

fn write_result<W: Write>(
    mut writer: W,
    graph: &HashMapGraph,
    opt: &Opt,
    cores: &CoreDecomposition,
) -> io::Result<()> {
    if opt.stats {
        let stats = GraphStatistics::with_decomposition(graph, cores);
        writeln!(writer, "c {}", stats)?;
    }
    if opt.cores {
        return CoreWriter::new(cores, writer).output();
    }
    match MaximalCliques::enumerate_until(graph, &mut CliStopper) {
        Some(cliques) => CliqueWriter::new(&cliques, writer).output(),
        None => Err(io::Error::new(
            io::ErrorKind::Interrupted,
            "clique enumeration interrupted",
        )),
    }
}

fn main() -> io::Result<()> {
    let opt = Opt::from_args();

    #[cfg(feature = "logging")]
    coreclique::logger::build_logger();
    #[cfg(feature = "handle-ctrlc")]
    coreclique::signals::initialize();
    if let Some(seconds) = opt.timeout {
        initialize_timeout(seconds);
    }

    let graph: HashMapGraph = match &opt.input {
        Some(path) => {
            let file = File::open(path)?;
            let reader = DimacsRead(BufReader::new(file));
            HashMapGraph::try_from(reader)?
        }
        None => {
            let stdin = stdin();
            let reader = DimacsRead(stdin.lock());
            HashMapGraph::try_from(reader)?
        }
    };

    let cores = CoreDecomposition::compute(&graph);

    match &opt.output {
        Some(path) => {
            let writer = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)?;
            write_result(writer, &graph, &opt, &cores)
        }
        None => {
            let writer = stdout();
            write_result(writer.lock(), &graph, &opt, &cores)
        }
    }
}
