//! Captured command output shared by the reader tests.

/// `lscpu` on a 4-core, 8-thread laptop.
pub(crate) const LSCPU_OUTPUT: &str = "\
Architecture:        x86_64
CPU op-mode(s):      32-bit, 64-bit
Byte Order:          Little Endian
CPU(s):              8
On-line CPU(s) list: 0-7
Thread(s) per core:  2
Core(s) per socket:  4
Socket(s):           1
NUMA node(s):        1
Vendor ID:           GenuineIntel
CPU family:          6
Model:               142
Model name:          Intel(R) Core(TM) i7-8550U CPU @ 1.80GHz
Stepping:            10
CPU MHz:             1046.410
CPU max MHz:         4000.0000
CPU min MHz:         800.0000
BogoMIPS:            3999.93
Virtualization:      VT-x
L1d cache:           32K
L1i cache:           32K
L2 cache:            256K
L3 cache:            8192K
NUMA node0 CPU(s):   0-7
Flags:               fpu vme de pse tsc msr pae mce cx8 apic sep mtrr sse sse2 ssse3 fma cx16 sse4_1 sse4_2 movbe popcnt aes xsave avx f16c rdrand avx2 bmi1 bmi2 erms
";

/// `sysctl hw` on a 4-core, 8-thread Intel Mac.
pub(crate) const SYSCTL_HW_OUTPUT: &str = "\
hw.ncpu: 8
hw.byteorder: 1234
hw.memsize: 17179869184
hw.activecpu: 8
hw.physicalcpu: 4
hw.physicalcpu_max: 4
hw.logicalcpu: 8
hw.logicalcpu_max: 8
hw.cputype: 7
hw.cpusubtype: 8
hw.cpu64bit_capable: 1
hw.cpufamily: 260141638
hw.cacheconfig: 8 2 2 8 0 0 0 0 0 0
hw.packages: 1
hw.pagesize: 4096
hw.cpufrequency: 2300000000
hw.cpufrequency_min: 2300000000
hw.cpufrequency_max: 2300000000
hw.optional.floatingpoint: 1
hw.optional.mmx: 1
hw.optional.sse: 1
hw.optional.sse2: 1
hw.optional.sse3: 1
hw.optional.supplementalsse3: 1
hw.optional.sse4_1: 1
hw.optional.sse4_2: 1
hw.optional.x86_64: 1
hw.optional.aes: 1
hw.optional.avx1_0: 1
hw.optional.rdrand: 1
hw.optional.f16c: 1
hw.optional.enfstrg: 1
hw.optional.fma: 1
hw.optional.avx2_0: 1
hw.optional.bmi1: 1
hw.optional.bmi2: 1
hw.optional.rtm: 0
hw.optional.hle: 0
hw.optional.adx: 1
hw.optional.mpx: 0
hw.optional.sgx: 0
hw.optional.avx512f: 0
hw.optional.avx512cd: 0
";

/// `wmic cpu get` on a 4-core, 8-thread laptop, as saved from a console.
pub(crate) const WMIC_CPU_OUTPUT: &str = "\
AddressWidth  Architecture  Caption                                 CurrentClockSpeed  L2CacheSize  Manufacturer  MaxClockSpeed  Name                                      NumberOfCores  NumberOfLogicalProcessors  Status  VoltageCaps  \r
\r
64            9             Intel64 Family 6 Model 142 Stepping 10  1992               1024         GenuineIntel  1992           Intel(R) Core(TM) i7-8550U CPU @ 1.80GHz  4              8                          OK                   \r
\r
";
